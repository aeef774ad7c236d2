use std::time::Instant;

use iced::Task;
use swipe_drawer::{DrawerEffect, DrawerEvent, GestureSample, Tween};

use super::event::DrawerIntent;
use super::model::{MenuPanel, Surface};
use super::state::DrawerState;

/// Read-only context for drawer reduction.
pub(crate) struct DrawerCtx {
    pub(crate) now: Instant,
}

/// Reduce a drawer intent into state updates and follow-up intents.
pub(crate) fn reduce(
    state: &mut DrawerState,
    intent: DrawerIntent,
    ctx: &DrawerCtx,
) -> Task<DrawerIntent> {
    match intent {
        DrawerIntent::TriggerTapped => {
            dispatch(state, DrawerEvent::TriggerTapped, ctx)
        },
        DrawerIntent::ItemSelected(index) => {
            let title = state
                .controller
                .panel()
                .and_then(|panel| panel.item_title(index))
                .map(str::to_string);
            if let Some(title) = title {
                log::info!("menu entry selected: {title}");
                state.selected_title = Some(title);
            }
            dispatch(state, DrawerEvent::Close, ctx)
        },
        DrawerIntent::PointerMoved(position) => {
            state.cursor = position;
            let Some(surface) = state.pressed_on else {
                return Task::none();
            };
            let cursor = state.cursor_vector();
            let sample = state.tracker_mut(surface).moved(cursor, ctx.now);
            forward_sample(state, surface, sample, ctx)
        },
        DrawerIntent::PointerPressed => {
            let surface = state.hit_test(state.cursor);
            let cursor = state.cursor_vector();
            state.tracker_mut(surface).press(cursor, ctx.now);
            state.pressed_on = Some(surface);
            Task::none()
        },
        DrawerIntent::PointerReleased => {
            let Some(surface) = state.pressed_on.take() else {
                return Task::none();
            };
            let cursor = state.cursor_vector();
            let sample = state.tracker_mut(surface).release(cursor, ctx.now);
            forward_sample(state, surface, sample, ctx)
        },
        DrawerIntent::PointerLeft => {
            let Some(surface) = state.pressed_on.take() else {
                return Task::none();
            };
            let sample = state.tracker_mut(surface).cancel();
            forward_sample(state, surface, sample, ctx)
        },
        DrawerIntent::Frame => advance_tween(state, ctx),
        DrawerIntent::SettleCompleted(id) => {
            dispatch(state, DrawerEvent::SettleCompleted(id), ctx)
        },
        DrawerIntent::Resized(size) => dispatch(
            state,
            DrawerEvent::Resized {
                viewport_width: size.width,
            },
            ctx,
        ),
    }
}

fn forward_sample(
    state: &mut DrawerState,
    surface: Surface,
    sample: Option<GestureSample>,
    ctx: &DrawerCtx,
) -> Task<DrawerIntent> {
    let Some(sample) = sample else {
        return Task::none();
    };
    let event = match surface {
        Surface::Content => DrawerEvent::ContentDrag(sample),
        Surface::Panel => DrawerEvent::PanelDrag(sample),
    };
    dispatch(state, event, ctx)
}

/// Feed one event to the controller and carry out its effects.
fn dispatch(
    state: &mut DrawerState,
    event: DrawerEvent,
    ctx: &DrawerCtx,
) -> Task<DrawerIntent> {
    let effects = state.controller.reduce(event, &mut state.factory);

    for effect in effects {
        match effect {
            DrawerEffect::Follow(origins) => {
                state.tween = None;
                state.origins = origins;
            },
            DrawerEffect::Animate(request) => {
                state.tween =
                    Some(Tween::new(request, state.origins, ctx.now));
            },
            DrawerEffect::Teardown(panel) => release_panel(panel),
        }
    }

    Task::none()
}

fn release_panel(panel: MenuPanel) {
    log::debug!("menu panel #{} removed", panel.instance());
}

/// Advance the running tween; report completion as a separate intent.
fn advance_tween(
    state: &mut DrawerState,
    ctx: &DrawerCtx,
) -> Task<DrawerIntent> {
    let Some(tween) = state.tween else {
        return Task::none();
    };

    let (origins, finished) = tween.sample(ctx.now);
    state.origins = origins;
    if !finished {
        return Task::none();
    }

    state.tween = None;
    Task::done(DrawerIntent::SettleCompleted(tween.request().id))
}
