//! Visibility phases and the transition state machine.

/// Animation-state position of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl Phase {
    /// Logical visibility: the settled state or the pending target.
    pub fn is_visible(self) -> bool {
        matches!(self, Phase::Opening | Phase::Open)
    }

    /// `Open` and `Closed` are stable, the other two are transient.
    pub fn is_stable(self) -> bool {
        matches!(self, Phase::Open | Phase::Closed)
    }

    /// Direction of the running transition, if any.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Phase::Opening => Some(Direction::Show),
            Phase::Closing => Some(Direction::Hide),
            Phase::Open | Phase::Closed => None,
        }
    }
}

/// Direction of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Show,
    Hide,
}

/// Progress of the current transient phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    /// No transition in flight.
    Idle,
    /// Waiting for the next frame before animating.
    AwaitingFrame,
    /// Animating; waiting for the completion signal or the safety timeout.
    Animating,
}

/// Announcement produced when a panel settles on a new stable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Settlement {
    pub visible: bool,
    /// The previous announcement was the opposite state, so this settle is a
    /// real shown/hidden transition rather than the mount announcement.
    pub transitioned: bool,
}

/// Pure transition logic, free of any bus or timing concerns.
///
/// Every request that changes the target bumps the generation. Frame and
/// completion callbacks carry the generation they were scheduled for, so a
/// superseded callback is recognised and dropped.
#[derive(Debug, Clone)]
pub(crate) struct Machine {
    phase: Phase,
    stage: Stage,
    generation: u64,
    /// Last visible value broadcast; `None` until the mount settle.
    announced: Option<bool>,
}

impl Machine {
    /// Start directly in a stable phase, without animation.
    pub fn new(visible: bool) -> Self {
        Self {
            phase: if visible { Phase::Open } else { Phase::Closed },
            stage: Stage::Idle,
            generation: 0,
            announced: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn visible(&self) -> bool {
        self.phase.is_visible()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_animating(&self) -> bool {
        self.stage == Stage::Animating
    }

    /// Retarget the machine.
    ///
    /// Returns the new generation when a transition starts or reverses, and
    /// `None` when `visible` already is the current target. The latest
    /// request always wins.
    pub fn request(&mut self, visible: bool) -> Option<u64> {
        if self.phase.is_visible() == visible {
            return None;
        }
        self.phase = if visible {
            Phase::Opening
        } else {
            Phase::Closing
        };
        self.stage = Stage::AwaitingFrame;
        self.generation += 1;
        Some(self.generation)
    }

    /// Frame step for `generation`. Returns true if animation starts now.
    pub fn frame(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.stage != Stage::AwaitingFrame {
            return false;
        }
        self.stage = Stage::Animating;
        true
    }

    /// Completion signal for `generation`. Returns true if the phase became
    /// stable.
    pub fn complete(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.stage != Stage::Animating {
            return false;
        }
        self.phase = match self.phase {
            Phase::Opening => Phase::Open,
            Phase::Closing => Phase::Closed,
            stable => stable,
        };
        self.stage = Stage::Idle;
        true
    }

    /// Produce the announcement for the current stable phase, if it differs
    /// from the last one.
    pub fn settle(&mut self) -> Option<Settlement> {
        if !self.phase.is_stable() {
            return None;
        }
        let visible = self.phase.is_visible();
        if self.announced == Some(visible) {
            return None;
        }
        let previous = self.announced.replace(visible);
        Some(Settlement {
            visible,
            transitioned: previous.is_some(),
        })
    }
}
