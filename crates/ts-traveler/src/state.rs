/// Where a traveler is in its spawn → queue → service → exit life.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum TravelerState {
    /// Spawned, not yet given a queue slot destination.
    #[default]
    GoingToQueue,
    /// Walking to / standing on its queue slot.
    Queuing,
    /// Admitted by its station; the pass-through routine owns it.
    Passing,
    /// Through the turnstile, walking to an exit.  The only state the player
    /// may inspect.
    PostGate,
    /// Halted for inspection; resumes its previous state afterwards.
    Controlled,
    /// Reported and about to be removed.
    Exited,
}

impl TravelerState {
    /// Label for logs and CSV columns.
    pub fn as_str(self) -> &'static str {
        match self {
            TravelerState::GoingToQueue => "going_to_queue",
            TravelerState::Queuing      => "queuing",
            TravelerState::Passing      => "passing",
            TravelerState::PostGate     => "post_gate",
            TravelerState::Controlled   => "controlled",
            TravelerState::Exited       => "exited",
        }
    }
}

impl std::fmt::Display for TravelerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
