//! External links derived from the shop config.
//!
//! Nothing here validates its input; `ShopConfig::validate` does that once
//! at load time.

use crate::config::ShopConfig;

pub const MESSAGING_BASE_URL: &str = "https://t.me";
pub const QR_SERVICE_BASE_URL: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Telegram deep link for the shop's channel.
pub fn messaging_url(config: &ShopConfig) -> String {
    format!("{}/{}", MESSAGING_BASE_URL, config.messaging_handle)
}

/// Image URL of a square QR code encoding `target_url`.
///
/// `size_px` and `color_hex` are passed through verbatim; only the target
/// is percent-encoded.
pub fn qr_image_url(target_url: &str, size_px: u32, color_hex: &str) -> String {
    format!(
        "{}?size={}x{}&color={}&data={}",
        QR_SERVICE_BASE_URL,
        size_px,
        size_px,
        color_hex,
        urlencoding::encode(target_url)
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrStyle {
    pub size_px: u32,
    pub color_hex: &'static str,
}

impl QrStyle {
    /// Map QR cards in the "how to find us" section.
    pub const CARD: QrStyle = QrStyle {
        size_px: 150,
        color_hex: "1e293b",
    };
    /// The larger channel QR in the contact block.
    pub const CONTACT: QrStyle = QrStyle {
        size_px: 200,
        color_hex: "15233e",
    };

    pub fn image_url(&self, target_url: &str) -> String {
        qr_image_url(target_url, self.size_px, self.color_hex)
    }
}

/// Every external URL the page links to or renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopLinks {
    pub messaging: String,
    pub primary_map: String,
    pub route: String,
    pub secondary_map: String,
    pub route_qr: String,
    pub secondary_map_qr: String,
    pub messaging_qr: String,
}

impl ShopLinks {
    pub fn derive(config: &ShopConfig) -> Self {
        let messaging = messaging_url(config);
        Self {
            route_qr: QrStyle::CARD.image_url(&config.route_url),
            secondary_map_qr: QrStyle::CARD.image_url(&config.secondary_map_url),
            messaging_qr: QrStyle::CONTACT.image_url(&messaging),
            messaging,
            primary_map: config.primary_map_url.clone(),
            route: config.route_url.clone(),
            secondary_map: config.secondary_map_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use url::Url;

    fn shop() -> ShopConfig {
        crate::config::load_shop_config().unwrap()
    }

    fn data_param(qr_url: &str) -> String {
        let (_, encoded) = qr_url.rsplit_once("&data=").unwrap();
        urlencoding::decode(encoded).unwrap().into_owned()
    }

    #[test]
    fn messaging_url_appends_handle() {
        assert_eq!(messaging_url(&shop()), "https://t.me/ryba_moya_gubern");
    }

    #[test]
    fn messaging_url_does_not_validate() {
        let mut config = shop();
        config.messaging_handle.clear();
        assert_eq!(messaging_url(&config), "https://t.me/");
    }

    #[test]
    fn qr_url_for_secondary_map() {
        let target = "https://2gis.ru/novokuznetsk/firm/70000001031547900";
        let url = qr_image_url(target, 150, "1e293b");
        assert_eq!(
            url,
            "https://api.qrserver.com/v1/create-qr-code/?size=150x150&color=1e293b\
             &data=https%3A%2F%2F2gis.ru%2Fnovokuznetsk%2Ffirm%2F70000001031547900"
        );
        assert_eq!(data_param(&url), target);
    }

    #[test]
    fn qr_data_round_trips_reserved_characters() {
        let targets = [
            "https://example.com/?a=1&b=2#frag",
            "route? from here & to there",
            "https://yandex.ru/maps/?rtext=~53.746724%2C87.137262",
            "ул. Кузнецова, 6А",
            "100% + 50%",
        ];
        for target in targets {
            let url = qr_image_url(target, 200, "15233e");
            assert_eq!(data_param(&url), target);

            // A generic URL parser must see the same single `data` value.
            let parsed = Url::parse(&url).unwrap();
            let data: Vec<_> = parsed
                .query_pairs()
                .filter(|(k, _)| k == "data")
                .map(|(_, v)| v.into_owned())
                .collect();
            assert_eq!(data, vec![target.to_string()]);
        }
    }

    #[test]
    fn qr_url_keeps_size_and_color_literal() {
        let url = qr_image_url("https://t.me/ryba_moya_gubern", 320, "ff00aa");
        assert!(url.starts_with(QR_SERVICE_BASE_URL));
        assert!(url.contains("size=320x320"));
        assert!(url.contains("color=ff00aa"));
    }

    #[test]
    fn styles_use_their_presets() {
        let target = "https://t.me/ryba_moya_gubern";
        assert_eq!(
            QrStyle::CONTACT.image_url(target),
            qr_image_url(target, 200, "15233e")
        );
        assert_eq!(
            QrStyle::CARD.image_url(target),
            qr_image_url(target, 150, "1e293b")
        );
    }

    #[test]
    fn derive_covers_every_action() {
        let config = shop();
        let links = ShopLinks::derive(&config);
        assert_eq!(links.messaging, "https://t.me/ryba_moya_gubern");
        assert_eq!(links.primary_map, config.primary_map_url);
        assert_eq!(links.route, config.route_url);
        assert_eq!(links.secondary_map, config.secondary_map_url);
        assert_eq!(data_param(&links.route_qr), config.route_url);
        assert_eq!(data_param(&links.secondary_map_qr), config.secondary_map_url);
        assert_eq!(data_param(&links.messaging_qr), links.messaging);
        assert!(links.messaging_qr.contains("size=200x200&color=15233e"));
    }

    #[test]
    fn derive_is_idempotent() {
        let config = shop();
        assert_eq!(ShopLinks::derive(&config), ShopLinks::derive(&config));
        assert_eq!(messaging_url(&config), messaging_url(&config));
    }
}
