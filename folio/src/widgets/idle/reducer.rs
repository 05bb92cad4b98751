use std::time::Instant;

use iced::Task;

use super::event::{IdleEffect, IdleEvent, IdleIntent};
use super::state::IdleState;

/// Read-only context for idle reduction.
pub(crate) struct IdleCtx {
    /// Instant the event is reduced at.
    pub(crate) now: Instant,
}

/// Reduce an idle intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut IdleState,
    event: IdleIntent,
    ctx: &IdleCtx,
) -> Task<IdleEvent> {
    let flipped = match event {
        IdleIntent::PointerMoved => state.pointer_moved(ctx.now),
        IdleIntent::Tick => state.advance(ctx.now),
    };

    if flipped {
        Task::done(IdleEvent::Effect(IdleEffect::IdleChanged(
            state.is_idle(),
        )))
    } else {
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::IdleCtx;
    use crate::widgets::idle::{IdleIntent, IdleWidget};
    use crate::widgets::navigator::{
        NavigatorCtx, NavigatorIntent, NavigatorWidget, Section,
    };

    fn ctx(base: Instant, ms: i64) -> IdleCtx {
        IdleCtx { now: offset(base, ms) }
    }

    fn offset(base: Instant, ms: i64) -> Instant {
        if ms >= 0 {
            base + Duration::from_millis(ms as u64)
        } else {
            base - Duration::from_millis(ms.unsigned_abs())
        }
    }

    fn moved(widget: &mut IdleWidget, base: Instant, ms: i64) {
        let _task = widget.reduce(IdleIntent::PointerMoved, &ctx(base, ms));
    }

    fn tick(widget: &mut IdleWidget, base: Instant, ms: i64) {
        let _task = widget.reduce(IdleIntent::Tick, &ctx(base, ms));
    }

    #[test]
    fn given_fresh_widget_when_created_then_it_is_not_idle_and_not_counting() {
        let widget = IdleWidget::new();
        assert!(!widget.vm().idle);
        assert!(!widget.needs_ticks());
    }

    #[test]
    fn given_single_pointer_move_when_threshold_elapses_then_idle_is_raised() {
        let base = Instant::now();
        let mut widget = IdleWidget::new();
        moved(&mut widget, base, 0);

        for ms in [0, 1_000, 4_999] {
            tick(&mut widget, base, ms);
            assert!(!widget.vm().idle, "idle at {ms}ms");
        }

        tick(&mut widget, base, 5_000);
        assert!(widget.vm().idle);
        tick(&mut widget, base, 9_000);
        assert!(widget.vm().idle);
        assert!(!widget.needs_ticks());
    }

    #[test]
    fn given_idle_widget_when_pointer_moves_then_idle_clears_and_countdown_restarts()
     {
        let base = Instant::now();
        let mut widget = IdleWidget::new();
        moved(&mut widget, base, 0);
        tick(&mut widget, base, 5_000);
        assert!(widget.vm().idle);

        moved(&mut widget, base, 6_000);
        assert!(!widget.vm().idle);

        tick(&mut widget, base, 10_999);
        assert!(!widget.vm().idle);
        tick(&mut widget, base, 11_000);
        assert!(widget.vm().idle);
    }

    #[test]
    fn given_frequent_moves_when_each_arrives_before_threshold_then_idle_never_raises()
     {
        let base = Instant::now();
        let mut widget = IdleWidget::new();

        for ms in (0..20_000).step_by(1_000) {
            moved(&mut widget, base, ms);
            tick(&mut widget, base, ms + 999);
            assert!(!widget.vm().idle, "idle at {ms}ms");
        }
    }

    #[test]
    fn given_disposed_widget_when_countdown_would_elapse_then_idle_stays_unchanged()
     {
        let base = Instant::now();
        let mut widget = IdleWidget::new();
        moved(&mut widget, base, 0);

        widget.dispose();
        tick(&mut widget, base, 5_000);
        moved(&mut widget, base, 6_000);
        tick(&mut widget, base, 12_000);

        assert!(!widget.vm().idle);
        assert!(!widget.needs_ticks());
    }

    #[test]
    fn given_transition_and_idle_countdown_when_interleaved_then_they_do_not_interfere()
     {
        let base = Instant::now();
        let mut navigator = NavigatorWidget::new(base);
        let mut idle = IdleWidget::new();
        moved(&mut idle, base, -100);

        let _task = navigator.reduce(
            NavigatorIntent::Select(Section::Contact),
            &NavigatorCtx { now: base },
        );

        for ms in [1_i64, 200, 399, 400, 449, 450, 4_899, 4_900] {
            let now = offset(base, ms);
            let _task =
                navigator.reduce(NavigatorIntent::Tick, &NavigatorCtx { now });
            tick(&mut idle, base, ms);

            let vm = navigator.vm();
            assert_eq!(vm.transitioning, ms < 450, "transitioning at {ms}ms");
            if ms >= 400 {
                assert_eq!(vm.current, Section::Contact, "current at {ms}ms");
            } else {
                assert_eq!(vm.current, Section::Home, "current at {ms}ms");
            }
            assert_eq!(idle.vm().idle, ms >= 4_900, "idle at {ms}ms");
        }
    }
}
