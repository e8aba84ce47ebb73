//!
//! The architecture the tested binary is asked to run on.
//!

///
/// The architecture the tested binary is asked to run on.
///
/// The value is passed verbatim as `--arch <TAG>` and selects the vectorized
/// likelihood kernels inside `bpp`.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum Architecture {
    /// The portable scalar code path.
    CPU,
    /// The SSE3 kernels.
    SSE,
    /// The AVX kernels.
    AVX,
    /// The AVX2 kernels.
    AVX2,
    /// The AVX-512 kernels.
    AVX512,
}

impl Architecture {
    ///
    /// The architectures exercised when the configuration does not list any.
    ///
    pub fn defaults() -> Vec<Self> {
        vec![Self::CPU, Self::SSE, Self::AVX, Self::AVX2]
    }

    ///
    /// All supported architectures.
    ///
    pub fn all() -> Vec<Self> {
        vec![Self::CPU, Self::SSE, Self::AVX, Self::AVX2, Self::AVX512]
    }
}

impl std::str::FromStr for Architecture {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_ascii_uppercase().as_str() {
            "CPU" => Ok(Self::CPU),
            "SSE" => Ok(Self::SSE),
            "AVX" => Ok(Self::AVX),
            "AVX2" => Ok(Self::AVX2),
            "AVX512" => Ok(Self::AVX512),
            _ => anyhow::bail!(
                "Unknown architecture `{}`. Supported architectures: {}",
                string,
                Self::all()
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl TryFrom<String> for Architecture {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for Architecture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CPU => write!(f, "CPU"),
            Self::SSE => write!(f, "SSE"),
            Self::AVX => write!(f, "AVX"),
            Self::AVX2 => write!(f, "AVX2"),
            Self::AVX512 => write!(f, "AVX512"),
        }
    }
}
