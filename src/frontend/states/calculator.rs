use dioxus::prelude::*;

/// One of the four arithmetic operators on the keypad.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    fn apply(self, lhs: f64, rhs: f64) -> Option<f64> {
        let value = match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs == 0.0 {
                    return None;
                }
                lhs / rhs
            }
        };
        value.is_finite().then_some(value)
    }
}

/// A keypad press.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CalcKey {
    Digit(u8),
    Decimal,
    Op(Operator),
    Equals,
    Clear,
    ToggleSign,
    Percent,
}

/// Four-function calculator state driven by keypad presses.
#[derive(Clone, PartialEq, Debug)]
pub struct CalculatorState {
    display: String,
    accumulator: Option<f64>,
    pending: Option<Operator>,
    /// Next digit starts a fresh entry instead of appending.
    start_new_entry: bool,
    errored: bool,
    last_expression: String,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            accumulator: None,
            pending: None,
            start_new_entry: true,
            errored: false,
            last_expression: String::new(),
        }
    }
}

impl CalculatorState {
    /// Current display value, or "Error" after an invalid operation.
    pub fn display(&self) -> &str {
        if self.errored { "Error" } else { &self.display }
    }

    /// The expression that produced the last equals result, for history.
    pub fn last_expression(&self) -> &str {
        &self.last_expression
    }

    pub const fn has_error(&self) -> bool {
        self.errored
    }

    pub fn press(&mut self, key: CalcKey) {
        // Any key after an error starts over
        if self.errored && key != CalcKey::Clear {
            *self = Self::default();
        }

        match key {
            CalcKey::Clear => *self = Self::default(),
            CalcKey::Digit(d) => self.push_digit(d.min(9)),
            CalcKey::Decimal => self.push_decimal(),
            CalcKey::Op(op) => self.set_operator(op),
            CalcKey::Equals => self.apply_equals(),
            CalcKey::ToggleSign => self.toggle_sign(),
            CalcKey::Percent => self.percent(),
        }
    }

    fn push_digit(&mut self, d: u8) {
        if self.start_new_entry {
            self.display = d.to_string();
            self.start_new_entry = false;
        } else if self.display == "0" {
            self.display = d.to_string();
        } else if self.display.len() < 16 {
            self.display.push_str(&d.to_string());
        }
    }

    fn push_decimal(&mut self) {
        if self.start_new_entry {
            self.display = "0.".to_string();
            self.start_new_entry = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    fn current_value(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }

    fn set_operator(&mut self, op: Operator) {
        // Chained operators resolve left to right: 1 + 2 * shows 3 first
        if !self.start_new_entry {
            self.apply_pending();
            if self.errored {
                return;
            }
        } else if self.accumulator.is_none() {
            self.accumulator = Some(self.current_value());
        }
        self.pending = Some(op);
        self.start_new_entry = true;
    }

    fn apply_pending(&mut self) {
        let rhs = self.current_value();
        let lhs = self.accumulator.unwrap_or(0.0);
        match self.pending {
            Some(op) => match op.apply(lhs, rhs) {
                Some(value) => {
                    self.accumulator = Some(value);
                    self.display = format_value(value);
                }
                None => self.errored = true,
            },
            None => self.accumulator = Some(rhs),
        }
    }

    fn apply_equals(&mut self) {
        if let (Some(lhs), Some(op)) = (self.accumulator, self.pending) {
            let rhs = self.current_value();
            self.last_expression =
                format!("{} {} {}", format_value(lhs), op.symbol(), self.display);
            match op.apply(lhs, rhs) {
                Some(value) => self.display = format_value(value),
                None => self.errored = true,
            }
        }
        self.accumulator = None;
        self.pending = None;
        self.start_new_entry = true;
    }

    fn toggle_sign(&mut self) {
        if self.display != "0" {
            if let Some(stripped) = self.display.strip_prefix('-') {
                self.display = stripped.to_string();
            } else {
                self.display.insert(0, '-');
            }
        }
    }

    fn percent(&mut self) {
        self.display = format_value(self.current_value() / 100.0);
        self.start_new_entry = true;
    }
}

fn format_value(value: f64) -> String {
    if value == 0.0 {
        // Normalizes -0
        return "0".to_string();
    }
    format!("{value}")
}

/// Hook providing the calculator state for the dashboard keypad.
pub fn use_calculator_state() -> Signal<CalculatorState> {
    use_signal(CalculatorState::default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use CalcKey::*;
    use Operator::*;

    fn press_all(state: &mut CalculatorState, keys: &[CalcKey]) {
        for &key in keys {
            state.press(key);
        }
    }

    #[test]
    fn digits_accumulate() {
        let mut state = CalculatorState::default();
        press_all(&mut state, &[Digit(1), Digit(2), Digit(0)]);
        assert_eq!(state.display(), "120");
    }

    #[test]
    fn leading_zero_is_replaced() {
        let mut state = CalculatorState::default();
        press_all(&mut state, &[Digit(0), Digit(7)]);
        assert_eq!(state.display(), "7");
    }

    #[test]
    fn simple_addition() {
        let mut state = CalculatorState::default();
        press_all(&mut state, &[Digit(1), Op(Add), Digit(2), Equals]);
        assert_eq!(state.display(), "3");
        assert_eq!(state.last_expression(), "1 + 2");
    }

    #[test]
    fn chained_operators_resolve_left_to_right() {
        let mut state = CalculatorState::default();
        press_all(
            &mut state,
            &[Digit(2), Op(Add), Digit(3), Op(Multiply), Digit(4), Equals],
        );
        // (2 + 3) * 4, not 2 + (3 * 4)
        assert_eq!(state.display(), "20");
    }

    #[test]
    fn decimal_entry() {
        let mut state = CalculatorState::default();
        press_all(&mut state, &[Digit(1), Decimal, Digit(5), Op(Multiply), Digit(2), Equals]);
        assert_eq!(state.display(), "3");
    }

    #[test]
    fn second_decimal_is_ignored() {
        let mut state = CalculatorState::default();
        press_all(&mut state, &[Digit(1), Decimal, Decimal, Digit(5)]);
        assert_eq!(state.display(), "1.5");
    }

    #[test]
    fn divide_by_zero_shows_error_until_cleared() {
        let mut state = CalculatorState::default();
        press_all(&mut state, &[Digit(5), Op(Divide), Digit(0), Equals]);
        assert_eq!(state.display(), "Error");
        assert!(state.has_error());

        state.press(Clear);
        assert_eq!(state.display(), "0");
        assert!(!state.has_error());
    }

    #[test]
    fn digit_after_error_starts_over() {
        let mut state = CalculatorState::default();
        press_all(&mut state, &[Digit(5), Op(Divide), Digit(0), Equals, Digit(9)]);
        assert_eq!(state.display(), "9");
    }

    #[test]
    fn toggle_sign_and_percent() {
        let mut state = CalculatorState::default();
        press_all(&mut state, &[Digit(5), Digit(0), ToggleSign]);
        assert_eq!(state.display(), "-50");
        state.press(ToggleSign);
        assert_eq!(state.display(), "50");
        state.press(Percent);
        assert_eq!(state.display(), "0.5");
    }

    #[test]
    fn equals_without_pending_operator_keeps_display() {
        let mut state = CalculatorState::default();
        press_all(&mut state, &[Digit(4), Digit(2), Equals]);
        assert_eq!(state.display(), "42");
    }

    #[test]
    fn subtraction_can_go_negative() {
        let mut state = CalculatorState::default();
        press_all(&mut state, &[Digit(3), Op(Subtract), Digit(8), Equals]);
        assert_eq!(state.display(), "-5");
    }
}
