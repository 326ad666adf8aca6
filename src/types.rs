/// URL scheme classification used to select scheme-specific behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SchemeType {
    #[default]
    Other,
    Http,
    Https,
    File,
    Ftp,
    Mailto,
    Data,
}

impl SchemeType {
    /// Check if this is `http` or `https`
    pub fn is_http(self) -> bool {
        matches!(self, Self::Http | Self::Https)
    }

    /// Get the port that is elided from URLs of this scheme
    ///
    /// Only `http` drops its default port; the other schemes keep whatever
    /// port was written.
    pub fn redundant_port(self) -> Option<&'static str> {
        match self {
            Self::Http => Some("80"),
            Self::Other | Self::Https | Self::File | Self::Ftp | Self::Mailto | Self::Data => None,
        }
    }

    /// Check if an authority is parsed even without a leading `//`
    pub fn assumes_authority(self) -> bool {
        match self {
            Self::Mailto => true,
            Self::Other | Self::Http | Self::Https | Self::File | Self::Ftp | Self::Data => false,
        }
    }

    /// Check if colons in the authority may separate credentials and port
    pub fn splits_authority_colons(self) -> bool {
        !matches!(self, Self::Mailto)
    }

    /// Check if credentials, host and port are discarded
    pub fn suppresses_authority(self) -> bool {
        matches!(self, Self::File)
    }

    /// Check if an empty path becomes `/`, given whether a host is present
    pub fn defaults_path(self, has_host: bool) -> bool {
        match self {
            Self::File => true,
            Self::Mailto => false,
            Self::Other | Self::Http | Self::Https | Self::Ftp | Self::Data => has_host,
        }
    }
}
