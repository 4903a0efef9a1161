use super::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label of the one coin the machine recognises but refuses.
pub const REJECTED_COIN_LABEL: &str = "5c";

/// Accepted coin denominations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Coin {
    #[serde(rename = "10c")]
    TenCents,
    #[serde(rename = "20c")]
    TwentyCents,
    #[serde(rename = "50c")]
    FiftyCents,
    #[serde(rename = "$1")]
    OneDollar,
    #[serde(rename = "$2")]
    TwoDollars,
}

impl Coin {
    pub const ALL: [Coin; 5] = [
        Coin::TenCents,
        Coin::TwentyCents,
        Coin::FiftyCents,
        Coin::OneDollar,
        Coin::TwoDollars,
    ];

    pub const fn value(&self) -> Money {
        match self {
            Coin::TenCents => Money::from_cents(10),
            Coin::TwentyCents => Money::from_cents(20),
            Coin::FiftyCents => Money::from_cents(50),
            Coin::OneDollar => Money::from_cents(100),
            Coin::TwoDollars => Money::from_cents(200),
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Coin::TenCents => "10c",
            Coin::TwentyCents => "20c",
            Coin::FiftyCents => "50c",
            Coin::OneDollar => "$1",
            Coin::TwoDollars => "$2",
        }
    }

    /// Looks up a coin by label, ignoring ASCII case.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|coin| coin.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Snacks on offer. Selector letters are fixed regardless of affordability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuItem {
    OrganicRaw,
    Caramel,
    Hazelnut,
}

impl MenuItem {
    /// All items, in selector letter order.
    pub const ALL: [MenuItem; 3] = [MenuItem::OrganicRaw, MenuItem::Caramel, MenuItem::Hazelnut];

    pub const fn price(&self) -> Money {
        match self {
            MenuItem::OrganicRaw => Money::from_cents(200),
            MenuItem::Caramel => Money::from_cents(250),
            MenuItem::Hazelnut => Money::from_cents(310),
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            MenuItem::OrganicRaw => "Organic Raw",
            MenuItem::Caramel => "Caramel",
            MenuItem::Hazelnut => "Hazelnut",
        }
    }

    pub const fn letter(&self) -> char {
        match self {
            MenuItem::OrganicRaw => 'A',
            MenuItem::Caramel => 'B',
            MenuItem::Hazelnut => 'C',
        }
    }

    /// Looks up an item by its selector letter, ignoring ASCII case.
    pub fn from_letter(input: &str) -> Option<Self> {
        let mut chars = input.chars();
        let letter = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|item| item.letter().eq_ignore_ascii_case(&letter))
    }

    pub fn is_affordable(&self, balance: Money) -> bool {
        balance >= self.price()
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
