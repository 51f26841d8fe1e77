use cascadia_shared::location::Location;

/// Structural oddities observed while building the tree. These are a side
/// channel only: the produced tree is the same whether or not anyone listens,
/// and none of them fail the parse.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticEvent {
    /// A block-end token arrived while no at-rule block was open
    UnbalancedBlockEnd { location: Location },
    /// The token stream ran out with this many at-rule blocks still open
    UnclosedGroup { open: usize },
}

/// Sink for diagnostic events, supplied by the caller
pub trait Diagnostics {
    fn report(&mut self, event: DiagnosticEvent);
}

/// Default sink: forwards every event to the `log` facade
#[derive(Debug, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&mut self, event: DiagnosticEvent) {
        match event {
            DiagnosticEvent::UnbalancedBlockEnd { location } => {
                log::warn!("block end without open group at {:?}", location);
            }
            DiagnosticEvent::UnclosedGroup { open } => {
                log::warn!("input ended with {} unclosed group(s)", open);
            }
        }
    }
}

/// Keeps every reported event in memory
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    pub events: Vec<DiagnosticEvent>,
}

impl Diagnostics for CollectingDiagnostics {
    fn report(&mut self, event: DiagnosticEvent) {
        self.events.push(event);
    }
}
