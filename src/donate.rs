//! Donation amount selection.
//!
//! One state machine drives the preset buttons, the free-form amount field
//! and the call-to-action label. Preset picks and the text field stay in
//! sync both ways: picking a preset rewrites the field, and typing a value
//! that exactly equals a preset lights that preset up again.

pub const PRESET_AMOUNTS: [u32; 4] = [10, 25, 50, 100];

/// Pounds of donation that fund roughly one hundred stoma bags.
const POUNDS_PER_HUNDRED_BAGS: f64 = 20.0;

#[derive(Debug, Clone)]
pub struct DonateState {
    pub monthly: bool,
    /// Preset currently lit, if the effective amount matches one.
    pub selected: Option<u32>,
    /// Raw text in the amount field, already sanitized.
    pub custom_text: String,
    /// Most recent value that parsed; keeps the amount stable while the
    /// field holds text that does not parse.
    last_valid: f64,
}

impl Default for DonateState {
    fn default() -> Self {
        Self {
            monthly: false,
            selected: Some(25),
            custom_text: String::from("25.00"),
            last_valid: 25.0,
        }
    }
}

/// Everything the donate call-to-action needs to render.
#[derive(Debug, Clone, PartialEq)]
pub struct DonateSummary {
    pub amount: f64,
    pub formatted: String,
    pub frequency_label: &'static str,
    pub bag_count: u32,
}

impl DonateState {
    pub fn select_preset(&mut self, amount: u32) {
        self.selected = Some(amount);
        self.custom_text = format!("{:.2}", f64::from(amount));
        self.last_valid = f64::from(amount);
    }

    /// Replace the amount field with `raw`, keeping only digits and the
    /// first decimal point. A value that parses updates the donation and
    /// re-syncs the preset row; one that does not leaves both alone.
    pub fn edit_custom(&mut self, raw: &str) {
        self.custom_text = sanitize(raw);
        if let Ok(value) = self.custom_text.parse::<f64>() {
            if value.is_finite() {
                self.last_valid = value;
                self.selected = PRESET_AMOUNTS
                    .iter()
                    .copied()
                    .find(|&preset| f64::from(preset) == value);
            }
        }
    }

    /// Append one typed character to the amount field. Characters the
    /// field cannot hold are dropped by the sanitizer.
    pub fn push_char(&mut self, c: char) {
        let mut next = self.custom_text.clone();
        next.push(c);
        self.edit_custom(&next);
    }

    pub fn backspace(&mut self) {
        let mut next = self.custom_text.clone();
        next.pop();
        self.edit_custom(&next);
    }

    pub fn set_frequency(&mut self, monthly: bool) {
        self.monthly = monthly;
    }

    pub fn is_selected(&self, preset: u32) -> bool {
        self.selected == Some(preset)
    }

    /// Amount the donor would give: the lit preset if any, otherwise the
    /// last value the field parsed to.
    pub fn effective_amount(&self) -> f64 {
        self.selected.map(f64::from).unwrap_or(self.last_valid)
    }

    /// Whole amounts print without decimals, fractional ones with two.
    pub fn formatted_amount(&self) -> String {
        let amount = self.effective_amount();
        if amount == amount.trunc() {
            format!("{amount:.0}")
        } else {
            format!("{amount:.2}")
        }
    }

    pub fn frequency_label(&self) -> &'static str {
        if self.monthly {
            "monthly"
        } else {
            "today"
        }
    }

    pub fn bag_count(&self) -> u32 {
        (self.effective_amount() / POUNDS_PER_HUNDRED_BAGS * 100.0).round() as u32
    }

    pub fn summary(&self) -> DonateSummary {
        DonateSummary {
            amount: self.effective_amount(),
            formatted: self.formatted_amount(),
            frequency_label: self.frequency_label(),
            bag_count: self.bag_count(),
        }
    }
}

fn sanitize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut seen_dot = false;
    for c in raw.chars() {
        if c.is_ascii_digit() {
            out.push(c);
        } else if c == '.' && !seen_dot {
            seen_dot = true;
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_twenty_five_today() {
        let state = DonateState::default();
        assert_eq!(state.selected, Some(25));
        assert_eq!(state.custom_text, "25.00");
        assert_eq!(state.effective_amount(), 25.0);
        let summary = state.summary();
        assert_eq!(summary.formatted, "25");
        assert_eq!(summary.frequency_label, "today");
        assert_eq!(summary.bag_count, 125);
    }

    #[test]
    fn selecting_a_preset_rewrites_the_field() {
        let mut state = DonateState::default();
        state.select_preset(50);
        assert_eq!(state.selected, Some(50));
        assert_eq!(state.custom_text, "50.00");
        assert_eq!(state.effective_amount(), 50.0);
        assert_eq!(state.bag_count(), 250);
    }

    #[test]
    fn custom_value_clears_the_preset_row() {
        let mut state = DonateState::default();
        state.edit_custom("12.5");
        assert_eq!(state.selected, None);
        assert_eq!(state.effective_amount(), 12.5);
        assert_eq!(state.formatted_amount(), "12.50");
        assert_eq!(state.bag_count(), 63);
    }

    #[test]
    fn typing_a_preset_value_lights_it_up() {
        let mut state = DonateState::default();
        state.edit_custom("100");
        assert_eq!(state.selected, Some(100));
        state.edit_custom("50.00");
        assert_eq!(state.selected, Some(50));
    }

    #[test]
    fn unparseable_text_keeps_the_previous_amount() {
        let mut state = DonateState::default();
        state.select_preset(50);
        state.edit_custom("abc");
        assert_eq!(state.custom_text, "");
        assert_eq!(state.selected, Some(50));
        assert_eq!(state.effective_amount(), 50.0);

        state.edit_custom("12.5");
        state.edit_custom("");
        assert_eq!(state.effective_amount(), 12.5);
    }

    #[test]
    fn sanitize_keeps_digits_and_first_dot() {
        let mut state = DonateState::default();
        state.edit_custom("£1a2.3.4");
        assert_eq!(state.custom_text, "12.34");
        assert_eq!(state.effective_amount(), 12.34);
    }

    #[test]
    fn frequency_toggle_changes_only_the_label() {
        let mut state = DonateState::default();
        let before = state.summary();
        state.set_frequency(true);
        let after = state.summary();
        assert_eq!(after.frequency_label, "monthly");
        assert_eq!(after.amount, before.amount);
        assert_eq!(after.bag_count, before.bag_count);
    }

    #[test]
    fn typed_characters_flow_through_the_sanitizer() {
        let mut state = DonateState::default();
        state.push_char('q');
        assert_eq!(state.custom_text, "25.00");
        assert_eq!(state.selected, Some(25));

        state.push_char('9');
        assert_eq!(state.custom_text, "25.009");
        assert_eq!(state.selected, None);
        assert_eq!(state.effective_amount(), 25.009);

        state.backspace();
        assert_eq!(state.custom_text, "25.00");
        assert_eq!(state.selected, Some(25));
    }

    #[test]
    fn bag_math_rounds_to_nearest() {
        let mut state = DonateState::default();
        state.edit_custom("10");
        assert_eq!(state.bag_count(), 50);
        state.edit_custom("12.5");
        assert_eq!(state.bag_count(), 63);
    }
}
