use wikiquiz_core::model::UrlCheck;

pub const INVALID_URL_MESSAGE: &str = "Please enter a valid Wikipedia article URL";
pub const VALIDATION_FAILED_MESSAGE: &str = "Failed to validate URL";

/// Validation status of the URL field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UrlValidity {
    /// Nothing typed yet.
    #[default]
    Unknown,
    Checking,
    Valid,
    Invalid,
}

impl UrlValidity {
    #[must_use]
    pub fn input_class(self) -> &'static str {
        match self {
            Self::Unknown | Self::Checking => "url-input",
            Self::Valid => "url-input url-input--valid",
            Self::Invalid => "url-input url-input--invalid",
        }
    }

    /// Hint shown under the field.
    #[must_use]
    pub fn hint(self) -> Option<&'static str> {
        match self {
            Self::Valid => Some("Valid Wikipedia URL detected"),
            Self::Invalid => Some(INVALID_URL_MESSAGE),
            Self::Unknown | Self::Checking => None,
        }
    }
}

impl From<&UrlCheck> for UrlValidity {
    fn from(check: &UrlCheck) -> Self {
        if check.valid { Self::Valid } else { Self::Invalid }
    }
}

/// Whether the generate button is enabled.
#[must_use]
pub fn can_generate(url: &str, validity: UrlValidity, loading: bool) -> bool {
    !url.trim().is_empty() && validity == UrlValidity::Valid && !loading
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExampleArticle {
    pub title: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

pub const EXAMPLE_ARTICLES: [ExampleArticle; 4] = [
    ExampleArticle {
        title: "Alan Turing",
        url: "https://en.wikipedia.org/wiki/Alan_Turing",
        description: "British mathematician and computer scientist",
    },
    ExampleArticle {
        title: "Machine Learning",
        url: "https://en.wikipedia.org/wiki/Machine_learning",
        description: "Field of artificial intelligence",
    },
    ExampleArticle {
        title: "Photosynthesis",
        url: "https://en.wikipedia.org/wiki/Photosynthesis",
        description: "Process by which plants convert light to energy",
    },
    ExampleArticle {
        title: "Renaissance",
        url: "https://en.wikipedia.org/wiki/Renaissance",
        description: "Cultural movement in European history",
    },
];
