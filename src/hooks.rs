use crate::event::MatchEvent;


// The only boundary the scoring core calls outward on. Renderers, loggers
// and tests decide what to do with the events.
pub trait MatchHooks {
    fn on_event(&mut self, event: &MatchEvent);
}

pub struct NoopMatchHooks {}

impl MatchHooks for NoopMatchHooks {
    fn on_event(&mut self, _event: &MatchEvent) {}
}
