use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    Tokyo,
    Paris,
    London,
    NewYork,
    Bangkok,
    Rome,
    Madrid,
    Istanbul,
    Milan,
    Singapore,
    Dubai,
    Beijing,
    Shenzhen,
    Berlin,
    KualaLumpur,
    Seoul,
    Shanghai,
    HongKong,
    Amsterdam,
    Sydney,
}

impl City {
    pub fn name(&self) -> &'static str {
        match *self {
            Self::Tokyo => "Tokyo",
            Self::Paris => "Paris",
            Self::London => "London",
            Self::NewYork => "New York",
            Self::Bangkok => "Bangkok",
            Self::Rome => "Rome",
            Self::Madrid => "Madrid",
            Self::Istanbul => "Istanbul",
            Self::Milan => "Milan",
            Self::Singapore => "Singapore",
            Self::Dubai => "Dubai",
            Self::Beijing => "Beijing",
            Self::Shenzhen => "Shenzhen",
            Self::Berlin => "Berlin",
            Self::KualaLumpur => "Kuala Lumpur",
            Self::Seoul => "Seoul",
            Self::Shanghai => "Shanghai",
            Self::HongKong => "Hong Kong",
            Self::Amsterdam => "Amsterdam",
            Self::Sydney => "Sydney",
        }
    }
}
