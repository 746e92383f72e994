// Count-up animation for the stat numbers. The element text is parsed once;
// each tick yields the text to show until the target is reached, at which
// point the original text comes back unchanged.

pub const STEPS: f64 = 40.0;
pub const INTERVAL_MS: i32 = 50;

#[derive(Debug, PartialEq)]
pub enum Tick {
    Show(String),
    Done(String),
}

#[derive(Debug)]
pub struct StatCounter {
    text: String,
    target: f64,
    current: f64,
    increment: f64,
    plus_suffix: bool,
}

impl StatCounter {
    /// `None` for text without a leading integer, or whose integer is zero.
    pub fn new(text: &str) -> Option<StatCounter> {
        let target = leading_integer(text)?;
        if target == 0.0 {
            return None;
        }
        Some(StatCounter {
            text: text.to_owned(),
            target,
            current: 0.0,
            increment: target / STEPS,
            plus_suffix: text.contains('+'),
        })
    }

    pub fn tick(&mut self) -> Tick {
        self.current += self.increment;
        if self.current >= self.target {
            Tick::Done(self.text.clone())
        } else {
            let suffix = if self.plus_suffix { "+" } else { "" };
            Tick::Show(format!("{}{}", self.current.floor() as i64, suffix))
        }
    }
}

// Optional sign then digits after leading whitespace, like parseInt(text, 10)
fn leading_integer(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let (sign, rest) = match text.as_bytes().first() {
        Some(b'-') => (-1.0, &text[1..]),
        Some(b'+') => (1.0, &text[1..]),
        _ => (1.0, text),
    };
    let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    rest[..digits].parse::<f64>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(counter: &mut StatCounter) -> Vec<Tick> {
        let mut ticks = Vec::new();
        loop {
            let tick = counter.tick();
            let done = matches!(tick, Tick::Done(_));
            ticks.push(tick);
            if done || ticks.len() > 100 {
                return ticks;
            }
        }
    }

    #[test]
    fn parses_leading_integer_like_parse_int() {
        assert_eq!(leading_integer("150+"), Some(150.0));
        assert_eq!(leading_integer("  42 years"), Some(42.0));
        assert_eq!(leading_integer("-3"), Some(-3.0));
        assert_eq!(leading_integer("+7"), Some(7.0));
        assert_eq!(leading_integer("v2"), None);
        assert_eq!(leading_integer(""), None);
        assert_eq!(leading_integer("-"), None);
    }

    #[test]
    fn zero_and_text_are_left_alone() {
        assert!(StatCounter::new("0").is_none());
        assert!(StatCounter::new("0+").is_none());
        assert!(StatCounter::new("many").is_none());
    }

    #[test]
    fn counts_up_in_forty_steps_with_plus() {
        let mut counter = StatCounter::new("150+").unwrap();
        let ticks = run(&mut counter);

        assert_eq!(ticks.len(), 40);
        assert_eq!(ticks[0], Tick::Show("3+".into()));
        assert_eq!(ticks[1], Tick::Show("7+".into()));
        assert_eq!(ticks[38], Tick::Show("146+".into()));
        assert_eq!(ticks[39], Tick::Done("150+".into()));
    }

    #[test]
    fn plain_number_has_no_suffix() {
        let mut counter = StatCounter::new("100").unwrap();
        assert_eq!(counter.tick(), Tick::Show("2".into()));
        assert_eq!(counter.tick(), Tick::Show("5".into()));
    }

    #[test]
    fn restores_original_text_when_done() {
        let mut counter = StatCounter::new("12 projects").unwrap();
        let ticks = run(&mut counter);
        assert!(ticks.len() <= 41);
        assert_eq!(ticks.last(), Some(&Tick::Done("12 projects".into())));
    }

    #[test]
    fn negative_target_finishes_at_once() {
        let mut counter = StatCounter::new("-5").unwrap();
        assert_eq!(counter.tick(), Tick::Done("-5".into()));
    }
}
