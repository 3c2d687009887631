//! Wall selection: a pure argmin/argmax over the candidate list.

use super::types::{Candidate, MeltCfg, WallPolicy};

impl WallPolicy {
    /// Index of the candidate to melt next.
    ///
    /// Pure function of the list; call only with a non-empty slice. A
    /// challenger wins only by beating the incumbent by more than the
    /// configured epsilon, so ties resolve to the earliest candidate in
    /// detection order.
    pub fn pick(self, cands: &[Candidate], cfg: MeltCfg) -> usize {
        debug_assert!(!cands.is_empty(), "pick requires at least one candidate");
        let mut best = 0usize;
        for k in 1..cands.len() {
            let better = match self {
                WallPolicy::Shortest => {
                    cands[k].stats.length < cands[best].stats.length - cfg.eps_len
                }
                WallPolicy::Longest => {
                    cands[k].stats.length > cands[best].stats.length + cfg.eps_len
                }
                WallPolicy::Sharpest => {
                    cands[k].stats.cos_angles[0] > cands[best].stats.cos_angles[0] + cfg.eps_cos
                }
            };
            if better {
                best = k;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::melt::types::{Shape, Wall, WallStats};

    fn cand(length: f64, lead_cos: f64) -> Candidate {
        Candidate {
            wall: Wall::new(0, 1),
            pair: (0, 1),
            merged: Shape::new(Vec::new()),
            stats: WallStats {
                length,
                cos_angles: [lead_cos, 0.0, 0.0, 0.0],
            },
        }
    }

    #[test]
    fn extremes_are_found() {
        let cands = vec![cand(2.0, 0.1), cand(0.5, 0.9), cand(3.0, 0.4)];
        let cfg = MeltCfg::default();
        assert_eq!(WallPolicy::Shortest.pick(&cands, cfg), 1);
        assert_eq!(WallPolicy::Longest.pick(&cands, cfg), 2);
        assert_eq!(WallPolicy::Sharpest.pick(&cands, cfg), 1);
    }

    #[test]
    fn ties_keep_detection_order() {
        let cfg = MeltCfg::default();
        let cands = vec![cand(1.0, 0.5), cand(1.0, 0.5), cand(1.0, 0.5)];
        for policy in [WallPolicy::Shortest, WallPolicy::Longest, WallPolicy::Sharpest] {
            assert_eq!(policy.pick(&cands, cfg), 0);
        }
        // Differences inside the epsilon are ties too.
        let wide = MeltCfg {
            eps_len: 1e-3,
            eps_cos: 1e-3,
        };
        let near = vec![cand(1.0, 0.5), cand(1.0 - 1e-4, 0.5 + 1e-4)];
        assert_eq!(WallPolicy::Shortest.pick(&near, wide), 0);
        assert_eq!(WallPolicy::Sharpest.pick(&near, wide), 0);
    }
}
