use super::model::Section;

/// Intent events handled by the navigator reducer.
#[derive(Debug, Clone)]
pub(crate) enum NavigatorIntent {
    /// A visitor asked to show `Section`.
    Select(Section),
    /// Evaluate pending transition deadlines.
    Tick,
}

/// Effect events produced by the navigator reducer.
#[derive(Debug, Clone)]
pub(crate) enum NavigatorEffect {
    /// The active panel was swapped to the given section.
    SectionSwapped(Section),
}

/// Navigator event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum NavigatorEvent {
    Intent(NavigatorIntent),
    Effect(NavigatorEffect),
}
