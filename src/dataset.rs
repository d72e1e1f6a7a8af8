//! Built-in delivery instance.
//!
//! A central warehouse in Tuzla, Istanbul and nine inter-city delivery
//! points across Türkiye.

use crate::models::Point;

/// Depot plus nine stops; index 0 is the depot.
///
/// # Examples
///
/// ```
/// use depot_tour::dataset;
/// use depot_tour::models::validate_points;
///
/// let points = dataset::turkey();
/// assert_eq!(points.len(), 10);
/// assert!(validate_points(&points).is_ok());
/// ```
pub fn turkey() -> Vec<Point> {
    vec![
        Point::depot(40.8190, 29.3005)
            .with_name("Merkez Depo")
            .with_city("İstanbul")
            .with_address("Tuzla Organize Sanayi Bölgesi, Lojistik Merkezi"),
        Point::stop(1, 39.9708, 32.6227)
            .with_name("Ankara Dağıtım Merkezi")
            .with_city("Ankara")
            .with_address("Ostim OSB, 100. Yıl Bulvarı No:52"),
        Point::stop(2, 38.4362, 27.1428)
            .with_name("İzmir Şubesi")
            .with_city("İzmir")
            .with_address("Alsancak, Kıbrıs Şehitleri Cad. No:118"),
        Point::stop(3, 40.2225, 28.8640)
            .with_name("Bursa Teslim Noktası")
            .with_city("Bursa")
            .with_address("Nilüfer, DOSAB Organize Sanayi"),
        Point::stop(4, 36.8841, 30.6927)
            .with_name("Antalya Mağaza")
            .with_city("Antalya")
            .with_address("Konyaaltı, Liman Cad. No:45"),
        Point::stop(5, 37.8746, 32.4932)
            .with_name("Konya Deposu")
            .with_city("Konya")
            .with_address("Selçuklu, Büsan Organize Sanayi No:78"),
        Point::stop(6, 37.7765, 29.0864)
            .with_name("Denizli Müşterisi")
            .with_city("Denizli")
            .with_address("Merkezefendi, Organize Sanayi Bölgesi No:14"),
        Point::stop(7, 39.7668, 30.5256)
            .with_name("Eskişehir Teslimat")
            .with_city("Eskişehir")
            .with_address("Tepebaşı, Organize Sanayi Bölgesi 11. Cad."),
        Point::stop(8, 38.7205, 35.4826)
            .with_name("Kayseri Dağıtım")
            .with_city("Kayseri")
            .with_address("Melikgazi, Kayseri OSB 3. Cadde No:22"),
        Point::stop(9, 38.7507, 30.5387)
            .with_name("Afyon Aktarma Noktası")
            .with_city("Afyonkarahisar")
            .with_address("Merkez, Afyon-Kütahya Karayolu 5. km"),
    ]
}
