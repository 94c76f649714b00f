//! Wizard position

use super::steps::Step;

/// 1-indexed step position.
///
/// Any value may be stored; readers always see a valid step because an
/// out-of-range value reads as the first step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepCursor {
    raw: i32,
}

impl Default for StepCursor {
    fn default() -> Self {
        Self { raw: 1 }
    }
}

impl StepCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Step {
        u8::try_from(self.raw)
            .ok()
            .and_then(Step::from_number)
            .unwrap_or(Step::Identity)
    }

    pub fn set(&mut self, step: i32) {
        self.raw = step;
    }

    /// Move one step forward; returns `false` on the last step
    pub fn advance(&mut self) -> bool {
        let current = self.current().number();
        if current >= Step::COUNT {
            return false;
        }
        self.raw = i32::from(current) + 1;
        true
    }

    /// Move one step back; returns `false` on the first step
    pub fn retreat(&mut self) -> bool {
        let current = self.current().number();
        if current <= 1 {
            return false;
        }
        self.raw = i32::from(current) - 1;
        true
    }

    pub fn is_first(&self) -> bool {
        self.current() == Step::Identity
    }

    pub fn is_last(&self) -> bool {
        self.current() == Step::Acknowledgment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_reads_as_first_step() {
        let mut cursor = StepCursor::new();
        for raw in [0, -4, 8, 250, i32::MAX] {
            cursor.set(raw);
            assert_eq!(cursor.current(), Step::Identity, "raw {raw}");
        }
        cursor.set(5);
        assert_eq!(cursor.current(), Step::Availability);
    }

    #[test]
    fn test_advance_and_retreat_bounds() {
        let mut cursor = StepCursor::new();
        assert!(!cursor.retreat());
        assert!(cursor.is_first());

        for _ in 1..Step::COUNT {
            assert!(cursor.advance());
        }
        assert!(cursor.is_last());
        assert!(!cursor.advance());
        assert_eq!(cursor.current(), Step::Acknowledgment);

        assert!(cursor.retreat());
        assert_eq!(cursor.current(), Step::AdditionalInfo);
    }

    #[test]
    fn test_advance_from_out_of_range_starts_over() {
        let mut cursor = StepCursor::new();
        cursor.set(42);
        assert!(cursor.advance());
        assert_eq!(cursor.current(), Step::Contact);
    }
}
