//! Bin specifications
//!
//! A field is either binned by the compiler (`Binning`, with parameters) or
//! arrives already binned (`Binned`), in which case the start field is bound
//! to the primary channel and the end field to the secondary channel.

use serde::{Deserialize, Deserializer, Serialize};

use crate::naming::var_name;

/// Default number of bins when binning is requested without parameters
pub const DEFAULT_MAXBINS: u32 = 10;

/// Binning parameters
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BinParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extent: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxbins: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minstep: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nice: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

impl BinParams {
    /// Parameters for `bin: true`
    pub fn normalized() -> Self {
        Self {
            maxbins: Some(DEFAULT_MAXBINS),
            ..Default::default()
        }
    }

    /// Stable name fragment for the binned field, e.g. `bin_maxbins_10`.
    pub fn to_name(&self) -> String {
        let mut out = String::from("bin");
        let mut push = |key: &str, value: String| {
            out.push_str(&var_name(&format!("_{}_{}", key, value)));
        };
        if let Some(v) = self.anchor {
            push("anchor", v.to_string());
        }
        if let Some(v) = self.base {
            push("base", v.to_string());
        }
        if let Some([lo, hi]) = self.extent {
            push("extent", format!("{}_{}", lo, hi));
        }
        if let Some(v) = self.maxbins {
            push("maxbins", v.to_string());
        }
        if let Some(v) = self.minstep {
            push("minstep", v.to_string());
        }
        if let Some(v) = self.nice {
            push("nice", v.to_string());
        }
        if let Some(v) = self.step {
            push("step", v.to_string());
        }
        out
    }
}

/// Bin setting of a field definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BinRepr", into = "BinRepr")]
pub enum BinSpec {
    /// The compiler bins the field with these parameters
    Binning(BinParams),
    /// The data is already binned; start and end are separate fields
    Binned,
}

impl BinSpec {
    pub fn is_binning(&self) -> bool {
        matches!(self, BinSpec::Binning(_))
    }

    pub fn is_binned(&self) -> bool {
        matches!(self, BinSpec::Binned)
    }
}

/// Authored shapes: `true`, `"binned"` or a parameter object
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum BinRepr {
    Flag(bool),
    Keyword(String),
    Params(BinParams),
}

impl TryFrom<BinRepr> for BinSpec {
    type Error = String;

    fn try_from(repr: BinRepr) -> Result<Self, Self::Error> {
        match repr {
            BinRepr::Flag(true) => Ok(BinSpec::Binning(BinParams::normalized())),
            BinRepr::Flag(false) => Err("bin: false should be omitted instead".to_string()),
            BinRepr::Keyword(k) if k == "binned" => Ok(BinSpec::Binned),
            BinRepr::Keyword(k) => Err(format!("Unknown bin keyword '{}'", k)),
            BinRepr::Params(mut params) => {
                if params.maxbins.is_none() && params.step.is_none() {
                    params.maxbins = Some(DEFAULT_MAXBINS);
                }
                Ok(BinSpec::Binning(params))
            }
        }
    }
}

impl From<BinSpec> for BinRepr {
    fn from(spec: BinSpec) -> Self {
        match spec {
            BinSpec::Binning(params) => BinRepr::Params(params),
            BinSpec::Binned => BinRepr::Keyword("binned".to_string()),
        }
    }
}

/// Decode a field's `bin` property. `false` and `null` mean no binning.
pub fn deserialize_bin<'de, D>(deserializer: D) -> Result<Option<BinSpec>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<BinRepr>::deserialize(deserializer)? {
        None | Some(BinRepr::Flag(false)) => Ok(None),
        Some(repr) => BinSpec::try_from(repr)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Whether the field is binned by the compiler
pub fn is_binning(bin: Option<&BinSpec>) -> bool {
    bin.is_some_and(BinSpec::is_binning)
}

/// Whether the field arrives already binned
pub fn is_binned(bin: Option<&BinSpec>) -> bool {
    bin.is_some_and(BinSpec::is_binned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_true_normalizes_to_maxbins() {
        let bin: BinSpec = serde_json::from_str("true").unwrap();
        assert_eq!(bin, BinSpec::Binning(BinParams::normalized()));
        if let BinSpec::Binning(params) = bin {
            assert_eq!(params.to_name(), "bin_maxbins_10");
        }
    }

    #[test]
    fn test_binned_keyword() {
        let bin: BinSpec = serde_json::from_str("\"binned\"").unwrap();
        assert!(bin.is_binned());
        assert!(!bin.is_binning());
        assert!(serde_json::from_str::<BinSpec>("\"other\"").is_err());
        assert!(serde_json::from_str::<BinSpec>("false").is_err());
    }

    #[test]
    fn test_bin_name_with_params() {
        let params = BinParams {
            step: Some(2.5),
            extent: Some([0.0, 100.0]),
            ..Default::default()
        };
        assert_eq!(params.to_name(), "bin_extent_0_100_step_2_5");
    }

    #[test]
    fn test_field_bin_false_means_unbinned() {
        #[derive(Deserialize)]
        struct Holder {
            #[serde(default, deserialize_with = "deserialize_bin")]
            bin: Option<BinSpec>,
        }

        let off: Holder = serde_json::from_str(r#"{"bin": false}"#).unwrap();
        assert_eq!(off.bin, None);
        let on: Holder = serde_json::from_str(r#"{"bin": true}"#).unwrap();
        assert_eq!(on.bin, Some(BinSpec::Binning(BinParams::normalized())));
        let binned: Holder = serde_json::from_str(r#"{"bin": "binned"}"#).unwrap();
        assert_eq!(binned.bin, Some(BinSpec::Binned));
        assert!(serde_json::from_str::<Holder>(r#"{"bin": "other"}"#).is_err());
    }

    #[test]
    fn test_bin_helpers_on_option() {
        let binning = BinSpec::Binning(BinParams::normalized());
        assert!(is_binning(Some(&binning)));
        assert!(!is_binned(Some(&binning)));
        assert!(is_binned(Some(&BinSpec::Binned)));
        assert!(!is_binning(None));
    }
}
