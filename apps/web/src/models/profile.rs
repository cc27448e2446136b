/// The goal value that selects the academic recommendation shape.
pub const HIGHER_STUDIES: &str = "Higher Studies";

/// Which recommendation shape applies to a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalKind {
    HigherStudies,
    Career,
}

impl GoalKind {
    /// Only the exact literal "Higher Studies" selects the academic shape;
    /// every other value (including empty) is a career goal.
    pub fn from_goal(goal: &str) -> Self {
        if goal == HIGHER_STUDIES {
            GoalKind::HigherStudies
        } else {
            GoalKind::Career
        }
    }
}

/// Profile submitted through the index form and resent on every later request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub age: String,
    pub qualifications: String,
    pub skills: String,
    pub interests: String,
    pub location: String,
    /// Raw goal text, kept verbatim for display.
    pub goal: String,
}

impl UserProfile {
    pub fn goal_kind(&self) -> GoalKind {
        GoalKind::from_goal(&self.goal)
    }

    /// Returns the name of the first required field that is blank, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            Some("name")
        } else if self.goal.trim().is_empty() {
            Some("goal")
        } else {
            None
        }
    }
}
