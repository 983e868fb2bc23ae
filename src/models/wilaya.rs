use serde::Serialize;

use crate::geo::GeoPoint;

#[derive(Debug, Clone, Serialize)]
pub struct Wilaya {
    pub code: u8,
    pub name: &'static str,
    pub centroid: GeoPoint,
}

const fn wilaya(code: u8, name: &'static str, lat: f64, lng: f64) -> Wilaya {
    Wilaya {
        code,
        name,
        centroid: GeoPoint::new(lat, lng),
    }
}

// Indexed by code - 1. Centroids are the provincial capitals.
static WILAYAS: [Wilaya; 58] = [
    wilaya(1, "Adrar", 27.8743, -0.2939),
    wilaya(2, "Chlef", 36.1652, 1.3345),
    wilaya(3, "Laghouat", 33.8000, 2.8651),
    wilaya(4, "Oum El Bouaghi", 35.8754, 7.1135),
    wilaya(5, "Batna", 35.5550, 6.1741),
    wilaya(6, "Béjaïa", 36.7509, 5.0567),
    wilaya(7, "Biskra", 34.8504, 5.7280),
    wilaya(8, "Béchar", 31.6238, -2.2162),
    wilaya(9, "Blida", 36.4700, 2.8277),
    wilaya(10, "Bouira", 36.3749, 3.9020),
    wilaya(11, "Tamanrasset", 22.7850, 5.5228),
    wilaya(12, "Tébessa", 35.4042, 8.1242),
    wilaya(13, "Tlemcen", 34.8783, -1.3150),
    wilaya(14, "Tiaret", 35.3710, 1.3170),
    wilaya(15, "Tizi Ouzou", 36.7169, 4.0497),
    wilaya(16, "Alger", 36.7538, 3.0588),
    wilaya(17, "Djelfa", 34.6704, 3.2630),
    wilaya(18, "Jijel", 36.8206, 5.7667),
    wilaya(19, "Sétif", 36.1898, 5.4108),
    wilaya(20, "Saïda", 34.8303, 0.1517),
    wilaya(21, "Skikda", 36.8762, 6.9092),
    wilaya(22, "Sidi Bel Abbès", 35.1899, -0.6309),
    wilaya(23, "Annaba", 36.9000, 7.7667),
    wilaya(24, "Guelma", 36.4621, 7.4261),
    wilaya(25, "Constantine", 36.3650, 6.6147),
    wilaya(26, "Médéa", 36.2642, 2.7539),
    wilaya(27, "Mostaganem", 35.9315, 0.0890),
    wilaya(28, "M'Sila", 35.7058, 4.5419),
    wilaya(29, "Mascara", 35.3969, 0.1403),
    wilaya(30, "Ouargla", 31.9493, 5.3250),
    wilaya(31, "Oran", 35.6969, -0.6331),
    wilaya(32, "El Bayadh", 33.6803, 1.0192),
    wilaya(33, "Illizi", 26.4833, 8.4667),
    wilaya(34, "Bordj Bou Arréridj", 36.0731, 4.7611),
    wilaya(35, "Boumerdès", 36.7664, 3.4772),
    wilaya(36, "El Tarf", 36.7672, 8.3138),
    wilaya(37, "Tindouf", 27.6711, -8.1474),
    wilaya(38, "Tissemsilt", 35.6072, 1.8108),
    wilaya(39, "El Oued", 33.3683, 6.8674),
    wilaya(40, "Khenchela", 35.4358, 7.1433),
    wilaya(41, "Souk Ahras", 36.2864, 7.9511),
    wilaya(42, "Tipaza", 36.5897, 2.4475),
    wilaya(43, "Mila", 36.4503, 6.2644),
    wilaya(44, "Aïn Defla", 36.2641, 1.9679),
    wilaya(45, "Naâma", 33.2667, -0.3167),
    wilaya(46, "Aïn Témouchent", 35.2975, -1.1404),
    wilaya(47, "Ghardaïa", 32.4909, 3.6735),
    wilaya(48, "Relizane", 35.7373, 0.5560),
    wilaya(49, "Timimoun", 29.2639, 0.2306),
    wilaya(50, "Bordj Badji Mokhtar", 21.3286, 0.9486),
    wilaya(51, "Ouled Djellal", 34.4167, 5.0667),
    wilaya(52, "Béni Abbès", 30.1333, -2.1667),
    wilaya(53, "In Salah", 27.1936, 2.4607),
    wilaya(54, "In Guezzam", 19.5686, 5.7722),
    wilaya(55, "Touggourt", 33.1000, 6.0667),
    wilaya(56, "Djanet", 24.5542, 9.4847),
    wilaya(57, "El M'Ghair", 33.9500, 5.9167),
    wilaya(58, "El Meniaa", 30.5833, 2.8833),
];

pub fn all() -> &'static [Wilaya] {
    &WILAYAS
}

pub fn by_code(code: u8) -> Option<&'static Wilaya> {
    let index = usize::from(code).checked_sub(1)?;
    WILAYAS.get(index)
}

#[cfg(test)]
mod tests {
    use super::{all, by_code};
    use crate::geo::estimate_road_km;

    #[test]
    fn catalogue_is_ordered_by_code() {
        for (index, wilaya) in all().iter().enumerate() {
            assert_eq!(usize::from(wilaya.code), index + 1);
        }
    }

    #[test]
    fn lookup_by_code() {
        assert_eq!(by_code(16).unwrap().name, "Alger");
        assert_eq!(by_code(31).unwrap().name, "Oran");
        assert!(by_code(0).is_none());
        assert!(by_code(59).is_none());
    }

    #[test]
    fn centroids_are_inside_algeria() {
        for wilaya in all() {
            assert!((18.0..=38.0).contains(&wilaya.centroid.lat), "{}", wilaya.name);
            assert!((-9.0..=12.0).contains(&wilaya.centroid.lng), "{}", wilaya.name);
        }
    }

    #[test]
    fn alger_to_oran_matches_fixture() {
        let alger = by_code(16).unwrap();
        let oran = by_code(31).unwrap();
        assert_eq!(estimate_road_km(&alger.centroid, &oran.centroid), 439);
    }
}
