use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Format {
    Standard,
    Future,
    Historic,
    Gladiator,
    Pioneer,
    Explorer,
    Modern,
    Legacy,
    Pauper,
    Vintage,
    Penny,
    Commander,
    Oathbreaker,
    Brawl,
    HistoricBrawl,
    Alchemy,
    PauperCommander,
    Duel,
    OldSchool,
    Premodern,
    Predh,
}

impl Format {
    /// Presentation order of the legality table. Independent of input order.
    pub const ALL: [Format; 21] = [
        Format::Standard,
        Format::Future,
        Format::Historic,
        Format::Gladiator,
        Format::Pioneer,
        Format::Explorer,
        Format::Modern,
        Format::Legacy,
        Format::Pauper,
        Format::Vintage,
        Format::Penny,
        Format::Commander,
        Format::Oathbreaker,
        Format::Brawl,
        Format::HistoricBrawl,
        Format::Alchemy,
        Format::PauperCommander,
        Format::Duel,
        Format::OldSchool,
        Format::Premodern,
        Format::Predh,
    ];
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Format::Standard => "Standard",
            Format::Future => "Future",
            Format::Historic => "Historic",
            Format::Gladiator => "Gladiator",
            Format::Pioneer => "Pioneer",
            Format::Explorer => "Explorer",
            Format::Modern => "Modern",
            Format::Legacy => "Legacy",
            Format::Pauper => "Pauper",
            Format::Vintage => "Vintage",
            Format::Penny => "Penny",
            Format::Commander => "Commander",
            Format::Oathbreaker => "Oathbreaker",
            Format::Brawl => "Brawl",
            Format::HistoricBrawl => "HistoricBrawl",
            Format::Alchemy => "Alchemy",
            Format::PauperCommander => "PauperCommander",
            Format::Duel => "Duel",
            Format::OldSchool => "OldSchool",
            Format::Premodern => "Premodern",
            Format::Predh => "Predh",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Legality {
    Legal,
    Banned,
    Restricted,
    #[default]
    NotLegal,
}

impl Legality {
    pub fn is_legal(&self) -> bool {
        matches!(self, Legality::Legal)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Legality::Legal => "legal",
            Legality::Banned => "banned",
            Legality::Restricted => "restricted",
            Legality::NotLegal => "not_legal",
        }
    }
}

impl From<&str> for Legality {
    fn from(value: &str) -> Self {
        match value {
            "legal" => Legality::Legal,
            "banned" => Legality::Banned,
            "restricted" => Legality::Restricted,
            _ => Legality::NotLegal,
        }
    }
}

impl fmt::Display for Legality {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Legality {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Legality {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Legality::from(s.as_str()))
    }
}

/// Per-format legality. Every format is required when the record is present.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Legalities {
    pub standard: Legality,
    pub future: Legality,
    pub historic: Legality,
    pub gladiator: Legality,
    pub pioneer: Legality,
    pub explorer: Legality,
    pub modern: Legality,
    pub legacy: Legality,
    pub pauper: Legality,
    pub vintage: Legality,
    pub penny: Legality,
    pub commander: Legality,
    pub oathbreaker: Legality,
    pub brawl: Legality,
    pub historicbrawl: Legality,
    pub alchemy: Legality,
    pub paupercommander: Legality,
    pub duel: Legality,
    pub oldschool: Legality,
    pub premodern: Legality,
    pub predh: Legality,
}

impl Legalities {
    pub fn get(&self, format: Format) -> Legality {
        match format {
            Format::Standard => self.standard,
            Format::Future => self.future,
            Format::Historic => self.historic,
            Format::Gladiator => self.gladiator,
            Format::Pioneer => self.pioneer,
            Format::Explorer => self.explorer,
            Format::Modern => self.modern,
            Format::Legacy => self.legacy,
            Format::Pauper => self.pauper,
            Format::Vintage => self.vintage,
            Format::Penny => self.penny,
            Format::Commander => self.commander,
            Format::Oathbreaker => self.oathbreaker,
            Format::Brawl => self.brawl,
            Format::HistoricBrawl => self.historicbrawl,
            Format::Alchemy => self.alchemy,
            Format::PauperCommander => self.paupercommander,
            Format::Duel => self.duel,
            Format::OldSchool => self.oldschool,
            Format::Premodern => self.premodern,
            Format::Predh => self.predh,
        }
    }

    pub fn all(&self) -> Vec<(Format, Legality)> {
        Format::ALL
            .iter()
            .map(|&format| (format, self.get(format)))
            .collect()
    }

    pub fn legal_formats(&self) -> Vec<Format> {
        self.all()
            .into_iter()
            .filter(|(_, legality)| legality.is_legal())
            .map(|(format, _)| format)
            .collect()
    }
}
