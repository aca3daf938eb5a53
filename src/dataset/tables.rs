// Sources:
// https://en.wikipedia.org/wiki/Telephone_numbers_in_Algeria
// https://www.howtocallabroad.com/algeria/

use super::region::Region;

pub const COUNTRY_CODE: &'static str = "213";
pub const INTERNATIONAL_PREFIX: &'static str = "00";
pub const TRUNK_PREFIX: &'static str = "0";

pub const DEFAULT_TIMEZONE: &'static str = "Africa/Algiers";

pub const LANDLINE_LEADING_DIGITS: &'static [char] = &['2', '3', '4'];
pub const MOBILE_LEADING_DIGITS: &'static [char] = &['5', '6', '7'];
pub const SPECIAL_LEADING_DIGITS: &'static [char] = &['8', '9'];

pub const MOBILE_LENGTH: usize = 9;
pub const LANDLINE_LENGTH: usize = 8;
pub const VOIP_LENGTH: usize = 8;
pub const VSAT_LENGTH: usize = 8;
pub const AREA_CODE_LENGTH: usize = 2;
// Emergency short codes vary in length.
pub const EMERGENCY_LENGTHS: &'static [usize] = &[2, 3, 4];

pub const VOIP_PREFIX: &'static str = "98";
pub const VSAT_PREFIX: &'static str = "96";

pub const MOBILE_CARRIERS: &'static [(char, &'static str)] = &[
    ('5', "Ooredoo"),
    ('6', "Mobilis"),
    ('7', "Djezzy"),
];

// Kept as published, duplicates included. Several area codes are listed for
// more than one region; the lookup map keeps the last entry for each code.
pub const LANDLINE_REGIONS: &'static [(&'static str, Region)] = &[
    ("49", Region::new("Adrar", -0.2936, 27.8743, 258.0)),
    ("27", Region::new("Ain Defla", 1.9594, 36.2509, 190.0)),
    ("43", Region::new("Ain Temouchent", -1.1400, 35.2970, 120.0)),
    ("21", Region::new("Algiers", 3.0588, 36.7538, 10.0)),
    ("38", Region::new("Annaba", 7.7667, 36.9000, 3.0)),
    ("33", Region::new("Batna", 6.1697, 35.5559, 1048.0)),
    ("34", Region::new("Bejaia", 5.0667, 36.7500, 2.0)),
    ("25", Region::new("Blida", 2.8276, 36.4700, 260.0)),
    ("35", Region::new("Bordj Bou Arreridj", 4.7611, 36.0736, 928.0)),
    ("26", Region::new("Bouira", 3.9000, 36.3667, 519.0)),
    ("24", Region::new("Boumerdes", 3.4772, 36.7664, 10.0)),
    ("27", Region::new("Chlef", 1.3319, 36.1654, 114.0)),
    ("31", Region::new("Constantine", 6.6147, 36.3650, 694.0)),
    ("27", Region::new("Djelfa", 3.2500, 34.6667, 1143.0)),
    ("32", Region::new("El Oued", 6.8639, 33.3683, 76.0)),
    ("29", Region::new("Ghardaia", 3.6736, 32.4839, 572.0)),
    ("37", Region::new("Guelma", 7.4264, 36.4614, 290.0)),
    ("29", Region::new("Illizi", 8.4667, 26.4833, 558.0)),
    ("34", Region::new("Jijel", 5.7667, 36.8167, 10.0)),
    ("32", Region::new("Khenchela", 7.1464, 35.4269, 1122.0)),
    ("29", Region::new("Laghouat", 2.8667, 33.8000, 769.0)),
    ("35", Region::new("M'sila", 4.5333, 35.7000, 471.0)),
    ("45", Region::new("Mascara", 0.1408, 35.4000, 570.0)),
    ("25", Region::new("Medea", 2.7583, 36.2675, 920.0)),
    ("31", Region::new("Mila", 6.2647, 36.4503, 470.0)),
    ("45", Region::new("Mostaganem", 0.0892, 35.9333, 104.0)),
    ("41", Region::new("Oran", -0.6333, 35.6911, 101.0)),
    ("29", Region::new("Ouargla", 5.3333, 31.9500, 141.0)),
    ("32", Region::new("Oum El Bouaghi", 7.1136, 35.8778, 902.0)),
    ("46", Region::new("Relizane", 0.5558, 35.7372, 98.0)),
    ("48", Region::new("Saida", 4.8306, 34.8303, 870.0)),
    ("36", Region::new("Setif", 5.4089, 36.1919, 1096.0)),
    ("48", Region::new("Sidi Bel Abbes", -0.6333, 35.2000, 470.0)),
    ("38", Region::new("Skikda", 6.9094, 36.8667, 18.0)),
    ("37", Region::new("Souk Ahras", 7.9514, 36.2864, 699.0)),
    ("29", Region::new("Tamanrasset", 5.5167, 22.7850, 1320.0)),
    ("37", Region::new("Tebessa", 8.1206, 35.4072, 858.0)),
    ("46", Region::new("Tiaret", 1.3167, 35.3667, 1032.0)),
    ("43", Region::new("Tlemcen", -1.3139, 34.8828, 842.0)),
    ("24", Region::new("Tipaza", 2.4500, 36.5833, 120.0)),
    ("46", Region::new("Tissemsilt", 1.8000, 35.6000, 850.0)),
    ("26", Region::new("Tizi Ouzou", 4.0500, 36.7167, 200.0)),
];

pub const EMERGENCY_NUMBERS: &'static [(&'static str, &'static str)] = &[
    ("1548", "Police Nationale"),
    ("17", "Police (Short Code)"),
    ("1055", "Gendarmerie Nationale"),
    ("1054", "Coast Guard"),
    ("14", "Protection Civile"),
    ("1021", "Civil Protection"),
    ("1040", "SAMU (Emergency Medical)"),
    ("1234", "Electricity Emergency"),
    ("1235", "Gas Emergency"),
];

pub const SPECIAL_NUMBERS: &'static [(&'static str, &'static str)] = &[
    ("98", "VOIP"),
    ("96", "VSAT"),
    ("97", "IoT/M2M Services"),
];
