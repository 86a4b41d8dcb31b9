use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::dimensions::{BoxDimensions, SectionShape};
use crate::error::SectionError;

/// One entry of the host's section table (`/db/SECT`), reduced to the fields
/// the centerline needs. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionRecord {
    #[serde(rename = "SECTTYPE")]
    pub sect_type: String,
    #[serde(rename = "SECT_NAME", default)]
    pub name: String,
    #[serde(rename = "SECT_BEFORE", default)]
    pub before: SectionBefore,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectionBefore {
    #[serde(rename = "SHAPE", default)]
    pub shape: String,
    #[serde(rename = "SECT_I")]
    pub sect_i: Option<SectionSizes>,
}

/// Positional dimension groups of the i-end of a PSC section.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionSizes {
    #[serde(rename = "vSIZE_PSC_A")]
    pub a: Vec<f64>,
    #[serde(rename = "vSIZE_PSC_B")]
    pub b: Vec<f64>,
    #[serde(rename = "vSIZE_PSC_C")]
    pub c: Vec<f64>,
    #[serde(rename = "vSIZE_PSC_D")]
    pub d: Vec<f64>,
}

/// A named box section ready for centerline extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSection {
    pub name: String,
    pub dims: BoxDimensions,
}

impl SectionRecord {
    /// Whether the record is a PSC section with a box shape this crate handles.
    #[must_use]
    pub fn is_box(&self) -> bool {
        self.sect_type == "PSC" && self.before.shape.parse::<SectionShape>().is_ok()
    }

    /// Converts the record into a [`BoxSection`].
    ///
    /// # Errors
    ///
    /// Returns `SectionError::NotBoxSection` for non-PSC records,
    /// `SectionError::MissingField` when the size groups are absent, and the
    /// errors of [`BoxDimensions::from_groups`] otherwise.
    pub fn to_box_section(&self) -> Result<BoxSection, SectionError> {
        if self.sect_type != "PSC" {
            return Err(SectionError::NotBoxSection(self.name.clone()));
        }
        let sizes = self
            .before
            .sect_i
            .as_ref()
            .ok_or_else(|| SectionError::MissingField("SECT_BEFORE.SECT_I".to_owned()))?;
        let dims =
            BoxDimensions::from_groups(&self.before.shape, &sizes.a, &sizes.b, &sizes.c, &sizes.d)?;
        Ok(BoxSection {
            name: self.name.clone(),
            dims,
        })
    }
}

/// Section properties computed by the host (`/ope/SECTPROP`), in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    pub area: f64,
    pub iy: f64,
    pub iz: f64,
    pub yl: f64,
    pub yr: f64,
    /// Distance from the centroid to the top fiber.
    pub zt: f64,
    /// Distance from the centroid to the bottom fiber.
    pub zb: f64,
}

/// Row of each property in the host's `DATA` table.
const AREA_ROW: usize = 0;
const IY_ROW: usize = 4;
const IZ_ROW: usize = 5;
const YL_ROW: usize = 6;
const YR_ROW: usize = 7;
const ZT_ROW: usize = 8;
const ZB_ROW: usize = 9;

impl SectionProperties {
    /// Top-fiber offset in metres, the `y` of the top fiber measured from the
    /// centroid.
    #[must_use]
    pub fn top_fiber_offset(&self) -> f64 {
        self.zt / 1000.0
    }

    /// Reads the properties of section `id` from a `/ope/SECTPROP` response.
    ///
    /// Each `DATA` row is `[label, value, ..]`; values arrive either as
    /// numbers or as numeric strings.
    ///
    /// # Errors
    ///
    /// Returns `SectionError::NotFound` when the section is absent and
    /// `SectionError::MissingField` for missing, non-numeric or non-finite
    /// rows.
    pub fn from_sectprop(response: &Value, id: u32) -> Result<Self, SectionError> {
        let rows = response
            .get("SECTPROP")
            .and_then(|t| t.get(id.to_string()))
            .ok_or(SectionError::NotFound(id))?
            .get("DATA")
            .and_then(Value::as_array)
            .ok_or_else(|| SectionError::MissingField("SECTPROP.DATA".to_owned()))?;

        let read = |row: usize| -> Result<f64, SectionError> {
            let cell = rows
                .get(row)
                .and_then(|r| r.get(1))
                .ok_or_else(|| SectionError::MissingField(format!("SECTPROP.DATA[{row}]")))?;
            match cell {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse().ok(),
                _ => None,
            }
            .filter(|v| v.is_finite())
            .ok_or_else(|| SectionError::MissingField(format!("SECTPROP.DATA[{row}] value")))
        };

        Ok(Self {
            area: read(AREA_ROW)?,
            iy: read(IY_ROW)?,
            iz: read(IZ_ROW)?,
            yl: read(YL_ROW)?,
            yr: read(YR_ROW)?,
            zt: read(ZT_ROW)?,
            zb: read(ZB_ROW)?,
        })
    }
}
