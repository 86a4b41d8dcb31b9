use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SectionError;

/// Box profile recognised by the boundary builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionShape {
    /// Single-cell box, `1CEL` in the host schema.
    #[serde(rename = "1CEL")]
    OneCell,
    /// Twin-cell box with a middle web, `2CEL` in the host schema.
    #[serde(rename = "2CEL")]
    TwoCell,
}

impl SectionShape {
    /// Host schema code of the shape.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::OneCell => "1CEL",
            Self::TwoCell => "2CEL",
        }
    }
}

impl FromStr for SectionShape {
    type Err = SectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1CEL" => Ok(Self::OneCell),
            "2CEL" => Ok(Self::TwoCell),
            other => Err(SectionError::UnsupportedShape(other.to_owned())),
        }
    }
}

impl fmt::Display for SectionShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Parametric dimensions of a PSC box section.
///
/// Field names follow the host's input dialog. The `ho*`/`bo*` groups describe
/// the outer profile (host arrays `vSIZE_PSC_A` and `vSIZE_PSC_B`), the
/// `hi*`/`bi*` groups the inner cell (`vSIZE_PSC_C`, `vSIZE_PSC_D`). Only the
/// right half is described; the section is mirrored about `x = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxDimensions {
    pub shape: SectionShape,
    // Outer heights.
    pub ho1: f64,
    pub ho2: f64,
    pub ho21: f64,
    pub ho22: f64,
    pub ho3: f64,
    pub ho31: f64,
    // Outer widths.
    pub bo1: f64,
    pub bo11: f64,
    pub bo12: f64,
    pub bo2: f64,
    pub bo21: f64,
    pub bo3: f64,
    // Inner heights.
    pub hi1: f64,
    pub hi2: f64,
    pub hi21: f64,
    pub hi22: f64,
    pub hi3: f64,
    pub hi31: f64,
    pub hi4: f64,
    pub hi41: f64,
    pub hi42: f64,
    pub hi5: f64,
    // Inner widths.
    pub bi1: f64,
    pub bi11: f64,
    pub bi12: f64,
    pub bi21: f64,
    pub bi3: f64,
    pub bi31: f64,
    pub bi32: f64,
    /// Half thickness of the middle web; zero for single-cell sections.
    pub bi4: f64,
}

impl Default for BoxDimensions {
    /// The host's default single-cell section, roughly 3 m deep and 8.5 m wide.
    fn default() -> Self {
        Self {
            shape: SectionShape::OneCell,
            ho1: 0.2,
            ho2: 0.3,
            ho21: 0.0,
            ho22: 0.0,
            ho3: 2.5,
            ho31: 0.0,
            bo1: 1.5,
            bo11: 0.5,
            bo12: 0.0,
            bo2: 0.5,
            bo21: 0.0,
            bo3: 2.25,
            hi1: 0.24,
            hi2: 0.26,
            hi21: 0.0,
            hi22: 0.0,
            hi3: 2.05,
            hi31: 0.71,
            hi4: 0.2,
            hi41: 0.0,
            hi42: 0.0,
            hi5: 0.25,
            bi1: 2.2,
            bi11: 0.7,
            bi12: 0.0,
            bi21: 2.2,
            bi3: 1.932,
            bi31: 0.7,
            bi32: 0.0,
            bi4: 0.0,
        }
    }
}

const A_LEN: usize = 6;
const B_LEN: usize = 6;
const C_LEN: usize = 10;
const D_LEN: usize = 7;

impl BoxDimensions {
    /// Builds the dimension set from the host's positional groups.
    ///
    /// `d` carries `bi4` as its eighth entry; it is read only for two-cell
    /// sections and may be absent for single-cell ones.
    ///
    /// # Errors
    ///
    /// Returns `SectionError::UnsupportedShape` for shapes other than `1CEL`
    /// and `2CEL`, `SectionError::WrongLength` for short groups, and
    /// `SectionError::InvalidDimension` for negative or non-finite values.
    pub fn from_groups(
        shape: &str,
        a: &[f64],
        b: &[f64],
        c: &[f64],
        d: &[f64],
    ) -> Result<Self, SectionError> {
        let shape: SectionShape = shape.parse()?;
        check_len("A", a, A_LEN)?;
        check_len("B", b, B_LEN)?;
        check_len("C", c, C_LEN)?;
        let d_len = match shape {
            SectionShape::OneCell => D_LEN,
            SectionShape::TwoCell => D_LEN + 1,
        };
        check_len("D", d, d_len)?;

        let dims = Self {
            shape,
            ho1: a[0],
            ho2: a[1],
            ho21: a[2],
            ho22: a[3],
            ho3: a[4],
            ho31: a[5],
            bo1: b[0],
            bo11: b[1],
            bo12: b[2],
            bo2: b[3],
            bo21: b[4],
            bo3: b[5],
            hi1: c[0],
            hi2: c[1],
            hi21: c[2],
            hi22: c[3],
            hi3: c[4],
            hi31: c[5],
            hi4: c[6],
            hi41: c[7],
            hi42: c[8],
            hi5: c[9],
            bi1: d[0],
            bi11: d[1],
            bi12: d[2],
            bi21: d[3],
            bi3: d[4],
            bi31: d[5],
            bi32: d[6],
            bi4: match shape {
                SectionShape::OneCell => 0.0,
                SectionShape::TwoCell => d[7],
            },
        };
        dims.validate()?;
        Ok(dims)
    }

    /// Checks that every length is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns `SectionError::InvalidDimension` for the first offending field.
    pub fn validate(&self) -> Result<(), SectionError> {
        for (name, value) in self.named_lengths() {
            if !value.is_finite() || value < 0.0 {
                return Err(SectionError::InvalidDimension { name, value });
            }
        }
        Ok(())
    }

    /// Total outer height, `ho1 + ho2 + ho3`.
    #[must_use]
    pub fn outer_height(&self) -> f64 {
        self.ho1 + self.ho2 + self.ho3
    }

    /// Total inner height, `hi1 + hi2 + hi3 + hi4 + hi5`.
    #[must_use]
    pub fn inner_height(&self) -> f64 {
        self.hi1 + self.hi2 + self.hi3 + self.hi4 + self.hi5
    }

    /// Half width of the top slab, `bo1 + bo2 + bo3`.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.bo1 + self.bo2 + self.bo3
    }

    fn named_lengths(&self) -> [(&'static str, f64); 30] {
        [
            ("ho1", self.ho1),
            ("ho2", self.ho2),
            ("ho21", self.ho21),
            ("ho22", self.ho22),
            ("ho3", self.ho3),
            ("ho31", self.ho31),
            ("bo1", self.bo1),
            ("bo11", self.bo11),
            ("bo12", self.bo12),
            ("bo2", self.bo2),
            ("bo21", self.bo21),
            ("bo3", self.bo3),
            ("hi1", self.hi1),
            ("hi2", self.hi2),
            ("hi21", self.hi21),
            ("hi22", self.hi22),
            ("hi3", self.hi3),
            ("hi31", self.hi31),
            ("hi4", self.hi4),
            ("hi41", self.hi41),
            ("hi42", self.hi42),
            ("hi5", self.hi5),
            ("bi1", self.bi1),
            ("bi11", self.bi11),
            ("bi12", self.bi12),
            ("bi21", self.bi21),
            ("bi3", self.bi3),
            ("bi31", self.bi31),
            ("bi32", self.bi32),
            ("bi4", self.bi4),
        ]
    }
}

fn check_len(group: &'static str, values: &[f64], expected: usize) -> Result<(), SectionError> {
    if values.len() < expected {
        return Err(SectionError::WrongLength {
            group,
            expected,
            actual: values.len(),
        });
    }
    Ok(())
}
