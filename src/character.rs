//! Seeded pixel-art RPG character.
//!
//! Each of the seed's eight digits picks one trait, so equal seeds always draw
//! the same character.

use crate::seed::Seed;

const SKIN: [&str; 10] = [
    "#ffdbac", "#f1c27d", "#e0ac69", "#c68642", "#8d5524", "#ffe0bd", "#eac086", "#d1a378",
    "#a1665e", "#503335",
];
const HAIR: [&str; 10] = [
    "#090806", "#2c222b", "#71635a", "#b7a69e", "#d6c4c2", "#cabfb1", "#dcd0ba", "#977961",
    "#e6cea8", "#a52a2a",
];
const CLOTH: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];
const EYES: [&str; 10] = [
    "#000000", "#1b3a6b", "#2e5e2e", "#5b3a1a", "#3d3d3d", "#0e4d64", "#4b0082", "#6b4423",
    "#223344", "#111111",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HairStyle {
    Bald,
    Short,
    Long,
    Mohawk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Headgear {
    None,
    Helmet,
    WizardHat,
    Crown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gear {
    None,
    Sword,
    Staff,
    Shield,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub seed: Seed,
    pub skin: &'static str,
    pub hair: &'static str,
    pub hair_style: HairStyle,
    pub shirt: &'static str,
    pub pants: &'static str,
    pub headgear: Headgear,
    pub gear: Gear,
    pub eyes: &'static str,
}

fn digits(seed: Seed) -> [usize; 8] {
    let mut out = [0usize; 8];
    let mut n = seed.get();
    for slot in out.iter_mut().rev() {
        *slot = (n % 10) as usize;
        n /= 10;
    }
    out
}

impl Character {
    pub fn from_seed(seed: Seed) -> Self {
        let d = digits(seed);
        Self {
            seed,
            skin: SKIN[d[0]],
            hair: HAIR[d[1]],
            hair_style: match d[2] % 4 {
                0 => HairStyle::Bald,
                1 => HairStyle::Short,
                2 => HairStyle::Long,
                _ => HairStyle::Mohawk,
            },
            shirt: CLOTH[d[3]],
            // Offset so shirt and pants never share a colour.
            pants: CLOTH[(d[4] + if d[4] == d[3] { 1 } else { 0 }) % 10],
            headgear: match d[5] {
                0..=4 => Headgear::None,
                5 | 6 => Headgear::Helmet,
                7 | 8 => Headgear::WizardHat,
                _ => Headgear::Crown,
            },
            gear: match d[6] % 4 {
                0 => Gear::None,
                1 => Gear::Sword,
                2 => Gear::Staff,
                _ => Gear::Shield,
            },
            eyes: EYES[d[7]],
        }
    }

    /// Inline SVG, 16x20 pixel grid scaled up. Hidden from assistive tech since
    /// the card already names the contributor.
    pub fn to_svg(&self, size_px: u32) -> String {
        let mut px = String::new();
        let mut rect = |x: u32, y: u32, w: u32, h: u32, fill: &str| {
            px.push_str(&format!(
                "<rect x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{h}\" fill=\"{fill}\"/>"
            ));
        };

        // legs, body, arms, head
        rect(5, 14, 2, 5, self.pants);
        rect(9, 14, 2, 5, self.pants);
        rect(4, 9, 8, 5, self.shirt);
        rect(2, 9, 2, 4, self.skin);
        rect(12, 9, 2, 4, self.skin);
        rect(5, 3, 6, 6, self.skin);
        rect(6, 5, 1, 1, self.eyes);
        rect(9, 5, 1, 1, self.eyes);

        match self.hair_style {
            HairStyle::Bald => {}
            HairStyle::Short => rect(5, 2, 6, 2, self.hair),
            HairStyle::Long => {
                rect(5, 2, 6, 2, self.hair);
                rect(4, 3, 1, 6, self.hair);
                rect(11, 3, 1, 6, self.hair);
            }
            HairStyle::Mohawk => rect(7, 0, 2, 3, self.hair),
        }

        match self.headgear {
            Headgear::None => {}
            Headgear::Helmet => rect(4, 1, 8, 2, "#9ea7ad"),
            Headgear::WizardHat => {
                rect(4, 2, 8, 1, "#3b2a7a");
                rect(6, 0, 4, 2, "#3b2a7a");
            }
            Headgear::Crown => rect(5, 0, 6, 2, "#f2c94c"),
        }

        match self.gear {
            Gear::None => {}
            Gear::Sword => rect(14, 4, 1, 8, "#c0c0c0"),
            Gear::Staff => rect(14, 2, 1, 12, "#8b5a2b"),
            Gear::Shield => rect(0, 9, 3, 4, "#6b6b6b"),
        }

        let height = size_px * 20 / 16;
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 20" width="{size_px}" height="{height}" shape-rendering="crispEdges" aria-hidden="true" focusable="false" data-seed="{seed}">{px}</svg>"#,
            seed = self.seed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(n: u32) -> Seed {
        Seed::new(n).unwrap()
    }

    #[test]
    fn same_seed_same_character() {
        let a = Character::from_seed(seed(12_345_678));
        let b = Character::from_seed(seed(12_345_678));
        assert_eq!(a, b);
        assert_eq!(a.to_svg(48), b.to_svg(48));
    }

    #[test]
    fn digits_select_traits() {
        let c = Character::from_seed(seed(90_231_807));
        assert_eq!(c.skin, SKIN[9]);
        assert_eq!(c.hair, HAIR[0]);
        assert_eq!(c.hair_style, HairStyle::Long);
        assert_eq!(c.shirt, CLOTH[3]);
        assert_eq!(c.pants, CLOTH[1]);
        assert_eq!(c.headgear, Headgear::WizardHat);
        assert_eq!(c.gear, Gear::None);
        assert_eq!(c.eyes, EYES[7]);
    }

    #[test]
    fn shirt_and_pants_differ() {
        let c = Character::from_seed(seed(10_044_000));
        assert_ne!(c.shirt, c.pants);
    }

    #[test]
    fn svg_is_decorative() {
        let svg = Character::from_seed(seed(55_555_555)).to_svg(32);
        assert!(svg.contains(r#"aria-hidden="true""#));
        assert!(svg.contains(r#"data-seed="55555555""#));
        assert!(svg.contains(r#"height="40""#));
    }
}
