//! Catalog of the uncertainty reference images and the downloadable
//! spreadsheet, with URL building against a site base.

use serde::Serialize;
use url::Url;

use crate::core::InventoryError;
use crate::core::config::{DATASET_SPREADSHEET, REFERENCES_ROOT};

/// A reference image shown in the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceImage {
    pub name: &'static str,
    pub file: &'static str,
}

/// Gallery tab a reference image belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ReferenceGroup {
    Activities,
    EmissionFactors,
}

const ACTIVITY_IMAGES: &[ReferenceImage] = &[
    ReferenceImage {
        name: "GHG Protocol",
        file: "GHG protocol .png",
    },
    ReferenceImage {
        name: "IPCC Volume 2 Chapter 1",
        file: "IPCC volume 2 chapter 1.png",
    },
    ReferenceImage {
        name: "Coke Burning (NEA Report)",
        file: "Coke burning from NEA report.png",
    },
    ReferenceImage {
        name: "Electricity in IPCC",
        file: "Electricity in IPCC.png",
    },
    ReferenceImage {
        name: "IPIECA Uncertainty Guide",
        file: "IPIECA Addressing Uncertainty in Oil and Natural Gas Industry GHG Inventories.png",
    },
    ReferenceImage {
        name: "IPIECA Flare Flow Meter Calculations",
        file: "IPIECA Addressing Uncertainty in Oil and Natural Gas Industry GHG Inventories- Flare flow meter calcs.png",
    },
];

const EMISSION_FACTOR_IMAGES: &[ReferenceImage] = &[
    ReferenceImage {
        name: "GHG Protocol",
        file: "GHG protocol .png",
    },
    ReferenceImage {
        name: "IPCC Natural Gas Emission Factor",
        file: "IPCC_V2_ch2_emission_factor_natural_gas.png",
    },
    ReferenceImage {
        name: "IPCC CH4 Flare",
        file: "IPCC_V2_ch4_ch4_flare.png",
    },
];

impl ReferenceGroup {
    pub const ALL: [Self; 2] = [Self::Activities, Self::EmissionFactors];

    #[must_use]
    pub const fn images(self) -> &'static [ReferenceImage] {
        match self {
            Self::Activities => ACTIVITY_IMAGES,
            Self::EmissionFactors => EMISSION_FACTOR_IMAGES,
        }
    }

    /// Asset folder under `references/`.
    #[must_use]
    pub const fn folder(self) -> &'static str {
        match self {
            Self::Activities => "activities",
            Self::EmissionFactors => "emission-factor",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Activities => "Activities",
            Self::EmissionFactors => "Emission Factors",
        }
    }
}

/// Base URLs must end in `/` for relative joins to stay under them.
fn normalized_base(base: &Url) -> Url {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}

/// URL of a reference image below `base`; the file name is percent-encoded.
///
/// # Errors
///
/// Returns [`InventoryError::Url`] if `base` cannot be a base URL.
pub fn reference_url(
    base: &Url,
    group: ReferenceGroup,
    image: &ReferenceImage,
) -> Result<Url, InventoryError> {
    let mut url = normalized_base(base);
    url.path_segments_mut()
        .map_err(|()| InventoryError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
        .pop_if_empty()
        .extend([REFERENCES_ROOT, group.folder(), image.file]);
    Ok(url)
}

/// URL of the spreadsheet export of the inventory below `base`.
///
/// # Errors
///
/// Returns [`InventoryError::Url`] if the join fails.
pub fn dataset_download_url(base: &Url) -> Result<Url, InventoryError> {
    Ok(normalized_base(base).join(DATASET_SPREADSHEET)?)
}
