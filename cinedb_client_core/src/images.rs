//! Image URL derivation
//!
//! Image URLs are derived, never fetched: `{image_base}/{size}{path}`. Each
//! image kind has a fixed set of valid size variants. An absent or empty
//! path yields no URL, which is the "no image" signal for callers.

use std::fmt;

macro_rules! image_size_enum {
    ($(#[$doc:meta])* $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

image_size_enum!(
    /// Backdrop size variants
    BackdropSize {
        W300 => "w300",
        W780 => "w780",
        W1280 => "w1280",
        Original => "original",
    }
);

image_size_enum!(
    /// Poster size variants
    PosterSize {
        W92 => "w92",
        W154 => "w154",
        W185 => "w185",
        W342 => "w342",
        W500 => "w500",
        W780 => "w780",
        Original => "original",
    }
);

image_size_enum!(
    /// Profile (person) size variants
    ProfileSize {
        W45 => "w45",
        W185 => "w185",
        H632 => "h632",
        Original => "original",
    }
);

image_size_enum!(
    /// Logo size variants
    LogoSize {
        W45 => "w45",
        W92 => "w92",
        W154 => "w154",
        W185 => "w185",
        W300 => "w300",
        W500 => "w500",
        Original => "original",
    }
);

image_size_enum!(
    /// Episode still size variants
    StillSize {
        W92 => "w92",
        W185 => "w185",
        W300 => "w300",
        Original => "original",
    }
);

/// Derive a full image URL, or `None` when there is no image path
///
/// `path` comes from the API with a leading slash (`"/abc.jpg"`), so the
/// size segment concatenates directly onto it.
pub fn image_url(image_base: &str, size: &str, path: Option<&str>) -> Option<String> {
    let path = path?;
    if path.is_empty() {
        return None;
    }
    Some(format!("{}/{size}{path}", image_base.trim_end_matches('/')))
}
