use std::fmt;

/// The claim types a profile is mapped to. See [Standard Claims](https://openid.net/specs/openid-connect-core-1_0.html#StandardClaims).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimType {
    /// End-User's full name in displayable form.
    Name,
    /// URL of the End-User's Web page or blog.
    Website,
    /// URL of the End-User's profile page.
    Profile,
    /// End-User's preferred postal address, a JSON object.
    Address,
}

impl ClaimType {
    /// Every profile claim type, in the order deltas are reported.
    pub const ALL: [ClaimType; 4] = [
        ClaimType::Name,
        ClaimType::Website,
        ClaimType::Profile,
        ClaimType::Address,
    ];

    pub fn as_str(&self) -> &'static str {
        use ClaimType::*;
        match *self {
            Name => "name",
            Website => "website",
            Profile => "profile",
            Address => "address",
        }
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
