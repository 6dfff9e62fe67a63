//! Static registry of the lending partners the estimator can brand itself
//! as. Presentation data only; the amortization engine never consults it.

use serde::Serialize;

/// One lending partner's branding and support details.
#[derive(Debug, Clone, Serialize)]
pub struct Partner {
    pub id: &'static str,
    pub name: &'static str,
    pub short_name: &'static str,
    pub hotline: &'static str,
    /// Brand color as a hex string, e.g. "#009E60".
    pub color: &'static str,
    pub logo_url: &'static str,
}

pub const PARTNERS: [Partner; 10] = [
    Partner {
        id: "fe",
        name: "FE Credit",
        short_name: "FE Credit",
        hotline: "1900 6535",
        color: "#009E60",
        logo_url: "https://cdn.haitrieu.com/wp-content/uploads/2022/01/Logo-FE-Credit.png",
    },
    Partner {
        id: "home",
        name: "Home Credit",
        short_name: "Home Credit",
        hotline: "1900 633 633",
        color: "#E60000",
        logo_url: "https://cdn.haitrieu.com/wp-content/uploads/2022/01/Logo-Home-Credit-Red.png",
    },
    Partner {
        id: "mirae",
        name: "Mirae Asset",
        short_name: "Mirae Asset",
        hotline: "028 7300 7777",
        color: "#003764",
        logo_url: "https://cdn.haitrieu.com/wp-content/uploads/2022/02/Logo-Mirae-Asset-Finance.png",
    },
    Partner {
        id: "lotte",
        name: "Lotte Finance",
        short_name: "Lotte Finance",
        hotline: "1900 6866",
        color: "#DA291C",
        logo_url: "https://cdn.haitrieu.com/wp-content/uploads/2022/02/Logo-Lotte-Finance.png",
    },
    Partner {
        id: "shb",
        name: "SHB Finance",
        short_name: "SHB Finance",
        hotline: "1900 2198",
        color: "#0054A6",
        logo_url: "https://cdn.haitrieu.com/wp-content/uploads/2022/01/Logo-SHB-Finance-H.png",
    },
    Partner {
        id: "hdbank",
        name: "HDBank",
        short_name: "HDBank",
        hotline: "1900 6060",
        color: "#E60000",
        logo_url: "https://cdn.haitrieu.com/wp-content/uploads/2022/01/Logo-HDBank.png",
    },
    Partner {
        id: "tnex",
        name: "Tnex Finance",
        short_name: "Tnex",
        hotline: "1800 599 982",
        color: "#00C2CB",
        logo_url: "https://cdn.haitrieu.com/wp-content/uploads/2022/03/Logo-TNEX.png",
    },
    Partner {
        id: "cub",
        name: "Cathay United",
        short_name: "Cathay United",
        hotline: "1900 1234",
        color: "#009F4D",
        logo_url: "https://cdn.haitrieu.com/wp-content/uploads/2022/01/Logo-Cathay-United-Bank-CUB.png",
    },
    Partner {
        id: "vikki",
        name: "Vikki Digital Bank",
        short_name: "Vikki",
        hotline: "1900 5678",
        color: "#6f00ff",
        logo_url: "https://cdn.haitrieu.com/wp-content/uploads/2023/12/Logo-Vikki-Digital-Bank.png",
    },
    Partner {
        id: "cake",
        name: "Cake by VPBank",
        short_name: "Cake",
        hotline: "1900 636 686",
        color: "#ff006e",
        logo_url: "https://cdn.haitrieu.com/wp-content/uploads/2022/01/Logo-Cake-Banking.png",
    },
];

/// Look up a partner by its identifier.
pub fn partner_by_id(id: &str) -> Option<&'static Partner> {
    PARTNERS.iter().find(|p| p.id == id)
}

/// Look up a partner, falling back to the first registry entry for unknown
/// identifiers. Matches the estimator UI, which never hard-fails on a stale
/// partner id.
pub fn partner_or_default(id: &str) -> &'static Partner {
    partner_by_id(id).unwrap_or(&PARTNERS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in PARTNERS.iter().enumerate() {
            for b in &PARTNERS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(partner_by_id("home").unwrap().name, "Home Credit");
        assert!(partner_by_id("acb").is_none());
    }

    #[test]
    fn test_unknown_id_falls_back_to_first() {
        assert_eq!(partner_or_default("nope").id, PARTNERS[0].id);
        assert_eq!(partner_or_default("cake").id, "cake");
    }

    #[test]
    fn test_hotlines_present() {
        for p in &PARTNERS {
            assert!(!p.hotline.is_empty());
            assert!(p.color.starts_with('#'));
        }
    }
}
