//! Cube analysis: color balance, mana curve, type and rarity breakdowns.
//!
//! [`analyze_cube`] is pure and total. Missing fields fall back to defaults
//! (`0` cmc, `"Unknown"` type, `"unknown"` rarity) instead of failing, and
//! every map is a `BTreeMap` so repeated runs serialize byte-for-byte equal.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::card::{Card, CubeCard};

/// Highest mana-curve bucket that is always reported.
pub const CURVE_MAX: i64 = 10;

/// Type bucket for cards without a type line.
pub const UNKNOWN_TYPE: &str = "Unknown";

/// Rarity bucket for cards without a rarity.
pub const UNKNOWN_RARITY: &str = "unknown";

/// The type-line separator between types and subtypes.
const SUBTYPE_SEPARATOR: char = '—';

/// Color bucket a single card is counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorBucket {
    White,
    Blue,
    Black,
    Red,
    Green,
    Multicolor,
    Colorless,
}

/// Card counts per color bucket. Every card lands in exactly one bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColorDistribution {
    pub white: u32,
    pub blue: u32,
    pub black: u32,
    pub red: u32,
    pub green: u32,
    pub multicolor: u32,
    pub colorless: u32,
}

impl ColorDistribution {
    fn increment(&mut self, bucket: ColorBucket) {
        let slot = match bucket {
            ColorBucket::White => &mut self.white,
            ColorBucket::Blue => &mut self.blue,
            ColorBucket::Black => &mut self.black,
            ColorBucket::Red => &mut self.red,
            ColorBucket::Green => &mut self.green,
            ColorBucket::Multicolor => &mut self.multicolor,
            ColorBucket::Colorless => &mut self.colorless,
        };
        *slot += 1;
    }

    pub fn total(&self) -> u32 {
        self.white + self.blue + self.black + self.red + self.green + self.multicolor + self.colorless
    }
}

/// Aggregate statistics over a cube's card list. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CubeAnalysis {
    pub total_cards: u32,
    pub color_distribution: ColorDistribution,
    pub mana_curve: BTreeMap<i64, u32>,
    pub type_distribution: BTreeMap<String, u32>,
    pub rarity_distribution: BTreeMap<String, u32>,
    pub average_cmc: f64,
}

/// Classify a card into its single color bucket.
///
/// No colors is colorless, two or more is multicolor, and a single color
/// letter maps to its full name. An unrecognised single letter counts as
/// colorless so the bucket totals always match the card count.
pub fn color_bucket(card: &Card) -> ColorBucket {
    match card.colors.as_slice() {
        [] => ColorBucket::Colorless,
        [single] => match single.trim().to_ascii_uppercase().as_str() {
            "W" => ColorBucket::White,
            "U" => ColorBucket::Blue,
            "B" => ColorBucket::Black,
            "R" => ColorBucket::Red,
            "G" => ColorBucket::Green,
            _ => ColorBucket::Colorless,
        },
        _ => ColorBucket::Multicolor,
    }
}

/// First whitespace-delimited token of the type line, ignoring subtypes.
///
/// This is a literal first-token rule: `"Legendary Creature — Elf"` yields
/// `"Legendary"`, not `"Creature"`.
pub fn primary_type(card: &Card) -> &str {
    card.type_line
        .as_deref()
        .and_then(|line| line.split(SUBTYPE_SEPARATOR).next())
        .and_then(|types| types.split_whitespace().next())
        .unwrap_or(UNKNOWN_TYPE)
}

fn cmc_of(card: &Card) -> f64 {
    card.cmc.filter(|cmc| cmc.is_finite()).unwrap_or(0.0)
}

fn rarity_of(card: &Card) -> &str {
    card.rarity
        .as_deref()
        .filter(|rarity| !rarity.is_empty())
        .unwrap_or(UNKNOWN_RARITY)
}

fn round_two_places(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute the analysis for a list of cube cards.
pub fn analyze_cube(cards: &[CubeCard]) -> CubeAnalysis {
    let mut color_distribution = ColorDistribution::default();
    let mut mana_curve: BTreeMap<i64, u32> = BTreeMap::new();
    let mut type_distribution: BTreeMap<String, u32> = BTreeMap::new();
    let mut rarity_distribution: BTreeMap<String, u32> = BTreeMap::new();
    let mut total_cmc = 0.0;

    for cube_card in cards {
        let card = &cube_card.card;
        let cmc = cmc_of(card);

        color_distribution.increment(color_bucket(card));
        *mana_curve.entry(cmc.floor() as i64).or_insert(0) += 1;
        *type_distribution
            .entry(primary_type(card).to_string())
            .or_insert(0) += 1;
        *rarity_distribution
            .entry(rarity_of(card).to_string())
            .or_insert(0) += 1;

        total_cmc += cmc;
    }

    for bucket in 0..=CURVE_MAX {
        mana_curve.entry(bucket).or_insert(0);
    }

    let average_cmc = if cards.is_empty() {
        0.0
    } else {
        round_two_places(total_cmc / cards.len() as f64)
    };

    CubeAnalysis {
        total_cards: cards.len() as u32,
        color_distribution,
        mana_curve,
        type_distribution,
        rarity_distribution,
        average_cmc,
    }
}
