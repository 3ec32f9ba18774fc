//! Ring layout for the orbiting skills visualization.
//!
//! Skill icons are bucketed into up to three concentric rings by count. The
//! bands are a fixed table evaluated top to bottom; the first band whose
//! `max_count` covers the orbiting subset wins. Entries beyond the orbiting
//! cap are returned separately as `remaining`.

use crate::domain::model::{IconSkill, Responsive, Ring, RingSet};

/// 最多放入軌道圈的技能數量
pub const MAX_ORBITING: usize = 36;

const ICON_SIZE: Responsive<u32> = Responsive::new(40, 32);

#[derive(Debug, Clone, Copy)]
struct RingStyle {
    radius: Responsive<u32>,
    rotation_period_secs: u32,
    reverse: bool,
}

#[derive(Debug)]
struct Band {
    max_count: usize,
    /// 累積百分比分割點，長度為圈數減一
    splits_percent: &'static [usize],
    styles: &'static [RingStyle],
}

const BANDS: [Band; 3] = [
    Band {
        max_count: 8,
        splits_percent: &[],
        styles: &[RingStyle {
            radius: Responsive::new(200, 120),
            rotation_period_secs: 20,
            reverse: false,
        }],
    },
    Band {
        max_count: 20,
        splits_percent: &[60],
        styles: &[
            RingStyle {
                radius: Responsive::new(220, 140),
                rotation_period_secs: 20,
                reverse: false,
            },
            RingStyle {
                radius: Responsive::new(120, 70),
                rotation_period_secs: 20,
                reverse: true,
            },
        ],
    },
    Band {
        max_count: MAX_ORBITING,
        splits_percent: &[50, 80],
        styles: &[
            RingStyle {
                radius: Responsive::new(220, 140),
                rotation_period_secs: 25,
                reverse: false,
            },
            RingStyle {
                radius: Responsive::new(140, 90),
                rotation_period_secs: 20,
                reverse: true,
            },
            RingStyle {
                radius: Responsive::new(70, 45),
                rotation_period_secs: 15,
                reverse: false,
            },
        ],
    },
];

/// `ceil(count * percent / 100)`，以整數運算避免浮點誤差
fn split_index(count: usize, percent: usize) -> usize {
    (count * percent).div_ceil(100)
}

fn band_for(count: usize) -> &'static Band {
    match BANDS.iter().find(|band| count <= band.max_count) {
        Some(band) => band,
        None => unreachable!(
            "orbiting subset of {} exceeds the {} entry cap",
            count, MAX_ORBITING
        ),
    }
}

fn layout_band(band: &Band, orbiting: &[IconSkill]) -> Vec<Ring> {
    let count = orbiting.len();
    let mut bounds = Vec::with_capacity(band.styles.len() + 1);
    bounds.push(0);
    bounds.extend(band.splits_percent.iter().map(|&p| split_index(count, p)));
    bounds.push(count);

    band.styles
        .iter()
        .zip(bounds.windows(2))
        .map(|(style, window)| Ring {
            members: orbiting[window[0]..window[1]].to_vec(),
            radius: style.radius,
            rotation_period_secs: style.rotation_period_secs,
            icon_size: ICON_SIZE,
            reverse: style.reverse,
        })
        .collect()
}

/// Partitions skills into rings plus the overflow beyond `cap`.
///
/// `cap` is clamped to [`MAX_ORBITING`]. The concatenation of all ring
/// members always equals the first `min(len, cap)` entries in input order.
pub fn compute_rings(entries: &[IconSkill], cap: usize) -> RingSet {
    let cap = cap.min(MAX_ORBITING);
    let split = entries.len().min(cap);
    let (orbiting, remaining) = entries.split_at(split);

    let rings = if orbiting.is_empty() {
        Vec::new()
    } else {
        layout_band(band_for(orbiting.len()), orbiting)
    };

    tracing::debug!(
        "Laid out {} skills in {} rings, {} remaining",
        orbiting.len(),
        rings.len(),
        remaining.len()
    );

    RingSet {
        rings,
        remaining: remaining.to_vec(),
    }
}

/// 使用預設上限 36
pub fn compute_default_rings(entries: &[IconSkill]) -> RingSet {
    compute_rings(entries, MAX_ORBITING)
}
