//! One-shot skill bar reveal driven by viewport visibility.

use crate::core::visibility::Intersection;

/// Index of a skill item in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SkillId(pub usize);

/// Lifecycle of a single skill bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillPhase {
    /// Still observed; not yet seen at the threshold.
    Watching,
    /// Seen; the width update is scheduled.
    Revealing,
    /// Width applied (or skipped for a malformed level). Terminal.
    Revealed,
}

#[derive(Clone, Debug, PartialEq)]
struct SkillBar {
    level: Option<f64>,
    phase: SkillPhase,
}

/// Parse a declared `data-level` percentage, clamped to `0..=100`.
#[must_use]
pub fn parse_level(raw: &str) -> Option<f64> {
    let value = raw.trim().trim_end_matches('%').parse::<f64>().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some(value.min(100.0))
}

/// Every skill bar on the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SkillBoard {
    bars: Vec<SkillBar>,
}

impl SkillBoard {
    /// Build from the raw declared levels, one per skill item.
    #[must_use]
    pub fn new(levels: &[Option<String>]) -> Self {
        let bars = levels
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                let level = raw.as_deref().and_then(parse_level);
                if level.is_none() {
                    tracing::warn!(item = index, raw = ?raw, "skill item has no usable level");
                }
                SkillBar {
                    level,
                    phase: SkillPhase::Watching,
                }
            })
            .collect();
        Self { bars }
    }

    /// Current phase of an item, if it exists.
    #[must_use]
    pub fn phase(&self, id: SkillId) -> Option<SkillPhase> {
        self.bars.get(id.0).map(|bar| bar.phase)
    }

    /// Fold an observer batch; returns items that just qualified for a reveal.
    pub fn intersect(&mut self, entries: &[Intersection<SkillId>], threshold: f64) -> Vec<SkillId> {
        let mut qualified = Vec::new();
        for entry in entries {
            if !entry.meets(threshold) {
                continue;
            }
            let Some(bar) = self.bars.get_mut(entry.key.0) else {
                continue;
            };
            if bar.phase == SkillPhase::Watching {
                bar.phase = SkillPhase::Revealing;
                qualified.push(entry.key);
            }
        }
        qualified
    }

    /// Complete a scheduled reveal; returns the CSS width to apply.
    pub fn reveal(&mut self, id: SkillId) -> Option<String> {
        let bar = self.bars.get_mut(id.0)?;
        if bar.phase != SkillPhase::Revealing {
            return None;
        }
        bar.phase = SkillPhase::Revealed;
        bar.level.map(|level| format!("{level}%"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> SkillBoard {
        SkillBoard::new(&[
            Some("90".to_string()),
            Some("abc".to_string()),
            Some("140".to_string()),
        ])
    }

    #[test]
    fn levels_parse_and_clamp() {
        assert_eq!(parse_level("85"), Some(85.0));
        assert_eq!(parse_level(" 72.5% "), Some(72.5));
        assert_eq!(parse_level("140"), Some(100.0));
        assert_eq!(parse_level("-3"), None);
        assert_eq!(parse_level("NaN"), None);
    }

    #[test]
    fn reveal_happens_once_after_qualifying() {
        let mut board = board();
        assert_eq!(board.reveal(SkillId(0)), None);

        let low = [Intersection::new(SkillId(0), true, 0.2)];
        assert!(board.intersect(&low, 0.5).is_empty());
        assert_eq!(board.phase(SkillId(0)), Some(SkillPhase::Watching));

        let high = [Intersection::new(SkillId(0), true, 0.8)];
        assert_eq!(board.intersect(&high, 0.5), vec![SkillId(0)]);
        assert!(board.intersect(&high, 0.5).is_empty());

        assert_eq!(board.reveal(SkillId(0)).as_deref(), Some("90%"));
        assert_eq!(board.reveal(SkillId(0)), None);
        assert_eq!(board.phase(SkillId(0)), Some(SkillPhase::Revealed));
    }

    #[test]
    fn malformed_level_finishes_without_width() {
        let mut board = board();
        board.intersect(&[Intersection::new(SkillId(1), true, 1.0)], 0.5);
        assert_eq!(board.reveal(SkillId(1)), None);
        assert_eq!(board.phase(SkillId(1)), Some(SkillPhase::Revealed));
    }

    #[test]
    fn out_of_range_ids_are_ignored() {
        let mut board = board();
        assert!(
            board
                .intersect(&[Intersection::new(SkillId(9), true, 1.0)], 0.5)
                .is_empty()
        );
        assert_eq!(board.phase(SkillId(9)), None);
    }
}
