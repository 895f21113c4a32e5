//! Count-up animation for the stat labels ("15,000+", "160+").

/// A stat label split into the number that animates and the text around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterTarget {
    pub value: u64,
    pub prefix: String,
    pub suffix: String,
    grouped: bool,
}

impl CounterTarget {
    /// The first run of digits (with `,` separators) is the number; the text
    /// before and after it is kept verbatim. No digits, or a number too large
    /// for `u64`, means a target of zero with the whole label as the suffix.
    pub fn parse(label: &str) -> Self {
        let unparsed = || Self {
            value: 0,
            prefix: String::new(),
            suffix: label.to_string(),
            grouped: false,
        };
        let Some(start) = label.find(|c: char| c.is_ascii_digit()) else {
            return unparsed();
        };
        let run_len = label[start..]
            .find(|c: char| !c.is_ascii_digit() && c != ',')
            .unwrap_or(label.len() - start);
        // a trailing separator belongs to the text, not the number
        let number = label[start..start + run_len].trim_end_matches(',');
        let end = start + number.len();

        let digits: String = number.chars().filter(char::is_ascii_digit).collect();
        match digits.parse() {
            Ok(value) => Self {
                value,
                prefix: label[..start].to_string(),
                suffix: label[end..].to_string(),
                grouped: number.contains(','),
            },
            Err(_) => unparsed(),
        }
    }

    pub fn display(&self, current: u64) -> String {
        let n = if self.grouped {
            group_thousands(current)
        } else {
            current.to_string()
        };
        format!("{}{n}{}", self.prefix, self.suffix)
    }

    pub fn final_display(&self) -> String {
        self.display(self.value)
    }
}

pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

pub fn group_thousands(n: u64) -> String {
    let raw = n.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Fires at most once.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OnceLatch {
    fired: bool,
}

impl OnceLatch {
    /// Returns `true` only on the first call.
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// Timeline of one counter. Time is whatever millisecond clock the caller
/// feeds in (`Date.now()` in the browser).
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: CounterTarget,
    duration_ms: f64,
    latch: OnceLatch,
    started_at: Option<f64>,
}

impl CounterAnimation {
    pub fn new(label: &str, duration_ms: f64) -> Self {
        Self {
            target: CounterTarget::parse(label),
            duration_ms: duration_ms.max(1.0),
            latch: OnceLatch::default(),
            started_at: None,
        }
    }

    pub fn target(&self) -> &CounterTarget {
        &self.target
    }

    /// Starts the animation on the first visibility trigger. Later triggers
    /// are ignored and return `false`.
    pub fn trigger(&mut self, now_ms: f64) -> bool {
        if !self.latch.fire() {
            return false;
        }
        self.started_at = Some(now_ms);
        true
    }

    pub fn started_at(&self) -> Option<f64> {
        self.started_at
    }

    pub fn value_at(&self, now_ms: f64) -> u64 {
        let Some(start) = self.started_at else { return 0; };
        let t = (now_ms - start) / self.duration_ms;
        if t >= 1.0 {
            return self.target.value;
        }
        (ease_out_cubic(t) * self.target.value as f64).floor() as u64
    }

    pub fn display_at(&self, now_ms: f64) -> String {
        self.target.display(self.value_at(now_ms))
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        matches!(self.started_at, Some(start) if now_ms - start >= self.duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(label: &str) -> Vec<String> {
        let mut anim = CounterAnimation::new(label, 1800.0);
        assert!(anim.trigger(0.0));
        (0..=120).map(|i| anim.display_at(i as f64 * 16.0)).collect()
    }

    #[test]
    fn grouped_target_settles_with_separators() {
        let frames = settle("15,000+");
        assert_eq!(frames.first().unwrap(), "0+");
        assert_eq!(frames.last().unwrap(), "15,000+");
    }

    #[test]
    fn plain_target_settles() {
        assert_eq!(settle("160+").last().unwrap(), "160+");
        assert_eq!(settle("500+").last().unwrap(), "500+");
    }

    #[test]
    fn unparseable_target_settles_at_zero_with_suffix() {
        let frames = settle("N/A");
        assert!(frames.iter().all(|f| f == "0N/A"));
    }

    #[test]
    fn decimal_label_keeps_its_tail() {
        let t = CounterTarget::parse("1.5k");
        assert_eq!(t.value, 1);
        assert_eq!(t.suffix, ".5k");
        assert_eq!(settle("1.5k").last().unwrap(), "1.5k");
    }

    #[test]
    fn prefixed_labels_keep_their_prefix() {
        assert_eq!(settle("Top 10").last().unwrap(), "Top 10");
        assert_eq!(settle("-5").last().unwrap(), "-5");
        assert_eq!(settle("$1,200 raised").last().unwrap(), "$1,200 raised");
        assert_eq!(settle("Top 10").first().unwrap(), "Top 0");
    }

    #[test]
    fn trailing_separator_stays_in_the_suffix() {
        let t = CounterTarget::parse("5, then more");
        assert_eq!(t.value, 5);
        assert_eq!(t.suffix, ", then more");
        assert_eq!(t.final_display(), "5, then more");
    }

    #[test]
    fn every_content_stat_settles_on_its_own_label() {
        for stat in crate::content::HUB_CONTENT.about_global.stats {
            assert_eq!(settle(stat.value).last().unwrap(), stat.value);
            // shown directly when no observer is available
            assert_eq!(CounterTarget::parse(stat.value).final_display(), stat.value);
        }
    }

    #[test]
    fn progression_is_monotonic_and_eased() {
        let anim = {
            let mut a = CounterAnimation::new("1000", 1000.0);
            a.trigger(0.0);
            a
        };
        let values: Vec<u64> = (0..=20).map(|i| anim.value_at(i as f64 * 50.0)).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        // ease-out: more than half the distance covered at the midpoint
        assert!(anim.value_at(500.0) > 500);
        assert!(anim.is_finished(1000.0));
        assert!(!anim.is_finished(999.0));
    }

    #[test]
    fn second_trigger_does_not_restart() {
        let mut anim = CounterAnimation::new("160+", 1800.0);
        assert!(anim.trigger(100.0));
        let mid = anim.display_at(1000.0);

        assert!(!anim.trigger(900.0));
        assert_eq!(anim.started_at(), Some(100.0));
        assert_eq!(anim.display_at(1000.0), mid);

        assert!(!anim.trigger(5000.0));
        assert_eq!(anim.display_at(5000.0), "160+");
    }

    #[test]
    fn untriggered_counter_shows_zero() {
        let anim = CounterAnimation::new("15,000+", 1800.0);
        assert_eq!(anim.display_at(10_000.0), "0+");
    }

    #[test]
    fn latch_fires_once() {
        let mut latch = OnceLatch::default();
        assert!(latch.fire());
        assert!(latch.has_fired());
        assert!(!latch.fire());
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
