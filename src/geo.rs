//! Built-in coarse world geometry in (longitude, latitude) degrees.
//!
//! Land outlines are simplified rings for the continents and larger islands;
//! inland seas are drawn back over the land in the ocean color. Borders are
//! open polylines for major land boundaries. Accuracy is a few degrees, which
//! is enough context for a global scatter overlay.

pub type Ring = &'static [(f64, f64)];

pub const LAND: &[Ring] = &[
    NORTH_AMERICA,
    GREENLAND,
    BAFFIN_ISLAND,
    ELLESMERE_ISLAND,
    VICTORIA_ISLAND,
    NEWFOUNDLAND,
    CUBA,
    HISPANIOLA,
    SOUTH_AMERICA,
    EURASIA,
    GREAT_BRITAIN,
    IRELAND,
    ICELAND,
    AFRICA,
    MADAGASCAR,
    SRI_LANKA,
    JAPAN_HONSHU,
    JAPAN_HOKKAIDO,
    SAKHALIN,
    TAIWAN,
    LUZON,
    MINDANAO,
    BORNEO,
    SUMATRA,
    JAVA,
    SULAWESI,
    NEW_GUINEA,
    AUSTRALIA,
    TASMANIA,
    NEW_ZEALAND_NORTH,
    NEW_ZEALAND_SOUTH,
    ANTARCTICA,
];

pub const INLAND_SEAS: &[Ring] = &[CASPIAN_SEA, BLACK_SEA];

const NORTH_AMERICA: Ring = &[
    (-168.0, 66.0), (-162.0, 70.0), (-156.0, 71.3), (-140.0, 69.6), (-128.0, 70.0),
    (-115.0, 68.5), (-95.0, 68.0), (-90.0, 64.0), (-94.0, 59.0), (-88.0, 56.5),
    (-82.0, 52.5), (-79.0, 55.0), (-77.0, 60.0), (-78.0, 62.5), (-70.0, 61.0),
    (-64.0, 60.0), (-62.0, 57.0), (-56.0, 52.0), (-59.0, 47.5), (-61.0, 45.5),
    (-66.0, 44.0), (-70.0, 41.7), (-74.0, 40.5), (-76.0, 35.0), (-81.0, 31.0),
    (-80.0, 25.5), (-82.0, 27.0), (-84.0, 30.0), (-90.0, 29.0), (-97.0, 27.5),
    (-97.5, 22.0), (-92.0, 18.5), (-87.0, 21.5), (-88.0, 16.0), (-84.0, 15.0),
    (-83.0, 10.0), (-79.5, 9.0), (-77.5, 8.0), (-80.0, 7.5), (-83.0, 8.5),
    (-86.0, 11.5), (-91.5, 14.0), (-95.0, 16.0), (-105.0, 19.5), (-106.0, 23.0),
    (-110.0, 23.0), (-115.0, 30.0), (-117.0, 32.5), (-120.5, 34.5), (-124.0, 40.0),
    (-124.0, 46.0), (-123.0, 49.0), (-127.0, 50.5), (-131.0, 54.0), (-136.0, 58.0),
    (-140.0, 60.0), (-146.0, 61.0), (-152.0, 59.0), (-158.0, 57.0), (-164.0, 55.0),
    (-158.0, 58.5), (-162.0, 60.0), (-165.0, 62.5), (-164.0, 64.5), (-168.0, 66.0),
];

const GREENLAND: Ring = &[
    (-73.0, 78.0), (-60.0, 82.0), (-30.0, 83.5), (-12.0, 81.5), (-18.0, 76.0),
    (-22.0, 70.0), (-32.0, 68.0), (-40.0, 65.0), (-43.0, 60.0), (-48.0, 61.0),
    (-53.0, 66.0), (-55.0, 70.0), (-60.0, 76.0), (-73.0, 78.0),
];

const BAFFIN_ISLAND: Ring = &[
    (-90.0, 71.5), (-80.0, 73.7), (-70.0, 70.5), (-61.5, 66.5), (-65.0, 62.0),
    (-74.0, 64.5), (-82.0, 66.5), (-90.0, 71.5),
];

const ELLESMERE_ISLAND: Ring = &[
    (-95.0, 76.0), (-75.0, 79.0), (-62.0, 82.0), (-80.0, 83.0), (-95.0, 81.0),
    (-100.0, 78.0), (-95.0, 76.0),
];

const VICTORIA_ISLAND: Ring = &[
    (-118.0, 69.0), (-102.0, 68.5), (-101.0, 72.0), (-113.0, 73.0), (-118.0, 71.0),
    (-118.0, 69.0),
];

const NEWFOUNDLAND: Ring = &[
    (-59.3, 47.6), (-55.8, 51.6), (-52.7, 47.5), (-56.0, 46.8), (-59.3, 47.6),
];

const CUBA: Ring = &[
    (-84.9, 21.9), (-82.0, 23.1), (-77.0, 22.3), (-74.2, 20.2), (-77.7, 19.9),
    (-81.5, 22.2), (-84.9, 21.9),
];

const HISPANIOLA: Ring = &[
    (-74.4, 18.4), (-72.0, 19.9), (-68.3, 18.6), (-71.3, 17.6), (-74.4, 18.4),
];

const SOUTH_AMERICA: Ring = &[
    (-77.5, 8.0), (-72.0, 12.0), (-63.0, 10.5), (-60.0, 8.5), (-52.0, 5.0),
    (-50.0, 0.0), (-44.0, -2.5), (-35.0, -5.5), (-35.0, -9.0), (-39.0, -13.5),
    (-39.5, -19.0), (-42.0, -23.0), (-48.5, -28.0), (-53.0, -34.0), (-58.0, -34.5),
    (-57.0, -38.0), (-62.5, -39.0), (-65.0, -42.0), (-67.5, -46.0), (-66.0, -48.0),
    (-69.0, -51.0), (-68.5, -54.5), (-72.0, -54.0), (-75.0, -50.0), (-74.0, -44.0),
    (-73.5, -37.0), (-71.5, -30.0), (-70.5, -18.0), (-76.0, -14.0), (-81.0, -5.5),
    (-80.0, -1.0), (-79.0, 1.5), (-77.5, 4.0), (-77.5, 8.0),
];

const EURASIA: Ring = &[
    (-9.0, 38.7), (-9.5, 43.0), (-8.0, 43.7), (-1.5, 43.5), (-1.2, 46.0),
    (-4.5, 47.8), (-4.6, 48.6), (-1.5, 48.7), (1.5, 50.2), (2.0, 51.0),
    (4.0, 51.8), (5.0, 53.3), (8.5, 53.8), (8.3, 57.1), (10.5, 57.7),
    (10.7, 54.4), (14.0, 54.0), (19.5, 54.4), (21.0, 56.5), (24.0, 57.3),
    (23.5, 59.2), (29.0, 60.0), (25.5, 65.0), (21.5, 65.5), (17.0, 61.5),
    (19.0, 59.5), (16.5, 56.5), (13.0, 55.5), (11.0, 59.0), (8.0, 58.0),
    (5.0, 59.0), (5.0, 62.0), (10.0, 64.0), (14.0, 67.5), (19.0, 70.0),
    (25.0, 71.0), (31.0, 70.0), (41.0, 67.0), (44.0, 68.5), (53.0, 68.5),
    (60.0, 69.5), (68.0, 72.0), (73.0, 68.0), (80.0, 73.0), (90.0, 75.5),
    (100.0, 77.0), (105.0, 78.0), (113.0, 74.0), (130.0, 71.0), (140.0, 72.5),
    (150.0, 71.5), (160.0, 69.7), (170.0, 70.0), (180.0, 69.0), (180.0, 65.0),
    (177.0, 62.5), (170.0, 60.0), (164.0, 59.8), (163.0, 56.0), (156.7, 51.0),
    (156.0, 57.0), (160.0, 61.5), (155.0, 59.3), (143.0, 59.3), (137.0, 54.0),
    (141.0, 52.0), (140.0, 48.0), (135.0, 43.5), (130.0, 42.5), (129.5, 36.0),
    (126.5, 34.5), (126.0, 37.5), (124.5, 40.0), (121.5, 39.0), (118.0, 39.0),
    (122.5, 37.0), (119.5, 35.0), (121.0, 31.5), (122.0, 30.0), (119.5, 25.5),
    (117.0, 23.5), (113.0, 22.0), (110.0, 21.0), (109.0, 21.5), (106.0, 20.0),
    (106.5, 17.5), (109.0, 12.0), (105.0, 8.7), (104.8, 10.5), (100.5, 13.5),
    (100.0, 9.0), (103.5, 4.0), (104.0, 1.3), (101.0, 2.8), (98.3, 8.0),
    (98.5, 13.0), (97.5, 16.5), (94.5, 16.0), (94.0, 19.5), (92.0, 21.5),
    (89.0, 22.0), (86.0, 20.0), (80.3, 15.8), (80.0, 10.5), (77.5, 8.0),
    (76.0, 10.5), (73.0, 17.0), (72.5, 21.0), (68.5, 23.5), (66.5, 25.5),
    (61.5, 25.2), (57.3, 25.8), (56.5, 27.1), (54.0, 26.6), (51.0, 28.0),
    (48.8, 30.0), (48.0, 29.5), (50.2, 26.5), (51.5, 24.4), (54.5, 24.2),
    (56.3, 26.2), (56.5, 24.5), (58.6, 23.6), (59.8, 22.4), (57.8, 18.9),
    (55.0, 17.0), (52.0, 15.7), (48.0, 14.0), (45.0, 12.8), (43.3, 12.7),
    (42.8, 15.0), (39.0, 21.5), (36.5, 25.7), (35.0, 28.5), (34.9, 32.5),
    (35.8, 35.2), (36.0, 36.8), (32.8, 36.1), (30.5, 36.3), (28.0, 36.7),
    (26.5, 38.5), (26.2, 40.3), (24.0, 40.7), (22.8, 40.5), (23.5, 38.2),
    (22.5, 36.5), (21.5, 37.0), (21.0, 38.5), (19.5, 40.3), (19.5, 41.8),
    (16.0, 43.5), (13.7, 45.6), (12.3, 45.3), (12.3, 44.3), (13.5, 43.6),
    (16.0, 41.5), (18.5, 40.2), (17.2, 39.0), (16.0, 38.0), (15.6, 38.2),
    (15.8, 40.0), (14.0, 40.8), (12.0, 41.9), (10.5, 42.9), (8.8, 44.4),
    (7.5, 43.8), (3.2, 43.3), (3.2, 41.9), (0.8, 41.0), (-0.3, 39.5),
    (0.0, 38.8), (-0.7, 37.6), (-2.1, 36.7), (-5.6, 36.0), (-6.4, 36.8),
    (-7.5, 37.2), (-8.9, 37.0), (-9.0, 38.7),
];

const GREAT_BRITAIN: Ring = &[
    (-5.7, 50.0), (-3.0, 50.6), (1.4, 51.2), (1.7, 52.7), (0.2, 53.5),
    (-0.5, 54.5), (-1.7, 55.6), (-3.0, 56.0), (-1.8, 57.6), (-3.2, 58.6),
    (-5.0, 58.6), (-6.2, 56.7), (-5.6, 55.3), (-3.0, 54.9), (-3.4, 53.4),
    (-4.7, 52.8), (-4.2, 51.6), (-5.7, 50.0),
];

const IRELAND: Ring = &[
    (-6.2, 52.2), (-6.0, 53.9), (-5.7, 54.6), (-7.2, 55.3), (-8.5, 54.3),
    (-10.0, 54.2), (-10.2, 51.6), (-8.3, 51.7), (-6.2, 52.2),
];

const ICELAND: Ring = &[
    (-22.5, 64.0), (-22.0, 65.5), (-23.5, 66.2), (-16.0, 66.5), (-13.5, 65.2),
    (-15.0, 64.3), (-18.7, 63.4), (-22.5, 64.0),
];

const AFRICA: Ring = &[
    (-17.0, 14.7), (-16.5, 19.5), (-17.0, 21.0), (-13.0, 27.5), (-9.8, 29.5),
    (-9.5, 32.5), (-6.8, 34.0), (-5.9, 35.8), (-2.0, 35.1), (3.0, 36.8),
    (10.0, 37.3), (11.0, 35.6), (10.2, 34.2), (11.5, 33.2), (15.2, 32.3),
    (19.0, 30.3), (20.0, 31.5), (20.0, 32.8), (23.0, 32.6), (25.0, 31.6),
    (29.0, 30.9), (32.3, 31.3), (34.2, 31.2), (34.9, 29.5), (34.3, 27.8),
    (33.8, 27.0), (35.7, 23.0), (37.4, 18.6), (39.0, 15.8), (41.6, 13.3),
    (43.3, 11.5), (44.0, 10.4), (51.2, 11.8), (51.0, 10.5), (48.0, 4.5),
    (43.0, -1.0), (40.0, -3.5), (39.3, -6.0), (39.8, -10.0), (40.5, -15.0),
    (36.8, -18.5), (35.3, -22.0), (35.5, -24.0), (32.9, -25.9), (32.5, -29.0),
    (30.0, -31.3), (27.5, -33.3), (25.5, -34.0), (22.0, -34.2), (20.0, -34.8),
    (18.4, -34.0), (18.0, -32.0), (15.2, -27.0), (14.5, -22.7), (11.8, -17.2),
    (13.6, -12.0), (12.2, -6.0), (9.0, -1.0), (9.7, 3.5), (8.5, 4.5),
    (5.5, 4.2), (1.5, 6.2), (-2.0, 4.7), (-7.5, 4.4), (-11.5, 6.8),
    (-13.3, 9.0), (-15.3, 11.0), (-16.8, 12.5), (-17.0, 14.7),
];

const MADAGASCAR: Ring = &[
    (49.3, -12.0), (50.5, -15.5), (49.5, -17.5), (47.2, -25.0), (45.0, -25.5),
    (43.6, -23.5), (43.3, -21.7), (44.4, -16.5), (46.5, -15.7), (48.0, -13.5),
    (49.3, -12.0),
];

const SRI_LANKA: Ring = &[(79.8, 6.0), (81.8, 7.2), (80.3, 9.8), (79.8, 8.0), (79.8, 6.0)];

const JAPAN_HONSHU: Ring = &[
    (130.0, 31.0), (131.5, 31.5), (132.0, 33.8), (135.0, 33.5), (137.0, 34.5),
    (140.0, 35.0), (141.0, 38.0), (142.0, 40.5), (141.5, 41.4), (140.0, 40.5),
    (139.5, 38.0), (137.0, 37.0), (133.0, 35.5), (131.0, 34.4), (130.0, 33.0),
    (130.0, 31.0),
];

const JAPAN_HOKKAIDO: Ring = &[
    (140.0, 41.5), (141.5, 42.5), (145.5, 43.3), (145.0, 44.3), (142.0, 45.5),
    (141.5, 44.0), (140.0, 43.0), (140.0, 41.5),
];

const SAKHALIN: Ring = &[
    (142.0, 46.0), (143.5, 49.0), (143.0, 53.5), (142.5, 54.3), (142.0, 51.0),
    (142.0, 46.0),
];

const TAIWAN: Ring = &[(120.0, 22.5), (121.0, 22.0), (122.0, 25.0), (121.5, 25.3), (120.0, 23.5), (120.0, 22.5)];

const LUZON: Ring = &[
    (120.0, 18.5), (122.3, 18.5), (122.0, 16.0), (124.0, 13.0), (121.0, 13.7),
    (120.0, 16.0), (120.0, 18.5),
];

const MINDANAO: Ring = &[(122.0, 7.0), (126.5, 7.0), (126.0, 9.5), (123.5, 8.5), (122.0, 7.0)];

const BORNEO: Ring = &[
    (109.0, 1.5), (111.0, -3.0), (116.0, -4.0), (118.0, 1.0), (119.0, 5.0),
    (117.0, 7.0), (114.0, 4.5), (111.0, 2.0), (109.0, 1.5),
];

const SUMATRA: Ring = &[
    (95.3, 5.6), (98.0, 4.0), (103.8, -1.0), (106.0, -5.8), (104.5, -5.9),
    (101.0, -2.5), (98.5, 1.5), (95.3, 5.6),
];

const JAVA: Ring = &[
    (105.0, -6.8), (106.0, -6.0), (111.0, -6.5), (114.5, -7.7), (114.0, -8.7),
    (108.0, -7.8), (105.0, -6.8),
];

const SULAWESI: Ring = &[
    (119.0, -5.5), (120.5, -2.0), (119.5, 0.0), (120.5, 1.0), (125.0, 1.5),
    (121.0, -1.0), (122.0, -4.8), (120.3, -5.6), (119.0, -5.5),
];

const NEW_GUINEA: Ring = &[
    (131.0, -1.0), (135.0, -3.3), (138.0, -1.5), (141.0, -2.6), (145.5, -5.0),
    (147.5, -6.5), (150.0, -10.5), (146.0, -8.0), (143.0, -9.0), (141.0, -9.1),
    (138.0, -8.3), (137.5, -5.0), (132.5, -4.0), (131.0, -1.0),
];

const AUSTRALIA: Ring = &[
    (113.5, -22.0), (114.0, -26.5), (115.0, -34.3), (118.0, -35.0), (123.5, -33.8),
    (129.0, -31.6), (131.0, -31.5), (135.5, -34.9), (138.0, -35.5), (140.0, -38.0),
    (144.0, -38.3), (146.5, -39.0), (150.0, -37.5), (151.3, -33.8), (153.0, -31.0),
    (153.5, -25.0), (150.8, -22.5), (146.3, -19.0), (145.3, -15.0), (142.5, -10.7),
    (141.5, -15.0), (140.5, -17.5), (137.0, -15.5), (136.8, -12.0), (131.0, -11.3),
    (129.5, -15.0), (125.0, -14.5), (122.2, -17.5), (119.0, -20.0), (113.5, -22.0),
];

const TASMANIA: Ring = &[(144.7, -40.7), (148.3, -40.9), (148.0, -43.2), (146.0, -43.6), (144.7, -40.7)];

const NEW_ZEALAND_NORTH: Ring = &[
    (172.7, -34.5), (174.5, -36.0), (178.5, -37.7), (177.0, -39.5), (175.2, -41.6),
    (174.6, -39.8), (173.8, -39.2), (174.5, -37.0), (172.7, -34.5),
];

const NEW_ZEALAND_SOUTH: Ring = &[
    (172.7, -40.5), (174.3, -41.7), (173.0, -43.5), (171.0, -45.0), (169.0, -46.7),
    (166.5, -46.0), (168.3, -44.0), (171.3, -42.0), (172.7, -40.5),
];

const ANTARCTICA: Ring = &[
    (-180.0, -90.0), (-180.0, -78.0), (-150.0, -76.5), (-120.0, -73.5), (-100.0, -72.5),
    (-75.0, -73.0), (-62.0, -64.5), (-57.0, -63.3), (-60.0, -68.0), (-65.0, -75.0),
    (-60.0, -80.0), (-40.0, -78.0), (-20.0, -73.5), (0.0, -70.0), (30.0, -69.5),
    (60.0, -67.0), (90.0, -66.5), (120.0, -66.5), (150.0, -68.5), (165.0, -71.0),
    (170.0, -77.0), (180.0, -78.0), (180.0, -90.0), (-180.0, -90.0),
];

const CASPIAN_SEA: Ring = &[
    (47.0, 44.5), (50.0, 46.8), (53.0, 46.5), (53.0, 42.0), (54.0, 40.0),
    (53.5, 37.3), (50.5, 37.0), (49.0, 38.0), (49.5, 40.5), (47.5, 42.5),
    (47.0, 44.5),
];

const BLACK_SEA: Ring = &[
    (28.0, 41.3), (28.7, 44.0), (30.5, 46.5), (33.5, 44.5), (36.5, 45.3),
    (39.0, 47.0), (38.0, 44.5), (41.6, 41.6), (36.0, 41.7), (31.0, 41.1),
    (28.0, 41.3),
];

/// Major land borders as open polylines
pub const BORDERS: &[Ring] = &[
    // North America
    &[
        (-123.0, 49.0), (-95.2, 49.0), (-89.6, 48.0), (-83.0, 46.0), (-82.4, 43.0),
        (-79.0, 43.3), (-76.0, 44.2), (-74.7, 45.0), (-71.5, 45.0), (-69.2, 47.4),
        (-67.8, 47.0), (-67.0, 44.8),
    ],
    &[(-141.0, 69.6), (-141.0, 60.3), (-137.0, 59.0), (-133.5, 58.4), (-130.0, 55.9)],
    &[
        (-117.1, 32.5), (-114.7, 32.7), (-111.0, 31.3), (-108.2, 31.3), (-106.4, 31.8),
        (-104.5, 29.6), (-103.0, 29.0), (-101.4, 29.8), (-99.5, 27.5), (-97.2, 25.9),
    ],
    &[(-92.2, 14.5), (-90.5, 16.0), (-91.4, 17.3), (-89.1, 17.8), (-88.3, 18.5)],
    // South America
    &[
        (-60.0, 5.2), (-64.0, 4.0), (-67.0, 1.0), (-69.8, 1.1), (-69.5, -1.0),
        (-70.0, -4.2), (-73.0, -7.4), (-72.5, -10.0), (-69.5, -11.0), (-65.4, -10.0),
        (-62.0, -13.5), (-60.0, -16.0), (-58.0, -17.5), (-57.5, -22.0), (-55.0, -24.0),
        (-54.0, -25.6), (-53.7, -27.0), (-57.6, -30.2), (-53.4, -33.7),
    ],
    &[
        (-68.6, -52.3), (-72.0, -51.0), (-72.0, -48.0), (-71.5, -44.0), (-71.8, -39.5),
        (-70.5, -36.0), (-70.0, -32.0), (-69.0, -27.0), (-68.5, -24.0), (-67.2, -22.8),
    ],
    &[(-69.0, -12.5), (-69.0, -15.5), (-69.5, -17.5), (-70.4, -18.3)],
    &[(-69.5, -17.5), (-68.5, -21.5), (-67.2, -22.8), (-64.5, -22.2), (-62.6, -22.2)],
    &[(-62.6, -22.2), (-57.6, -25.3), (-54.6, -25.6)],
    &[(-72.0, 11.1), (-72.5, 7.4), (-67.5, 6.2), (-67.3, 2.2), (-66.9, 1.2)],
    &[(-80.3, -3.4), (-78.5, -5.0), (-75.3, -0.1), (-78.9, 1.4)],
    &[(-58.4, -33.9), (-57.6, -30.2)],
    // Europe
    &[(-1.8, 43.4), (3.2, 42.4)],
    &[(-8.9, 41.9), (-7.0, 42.0), (-6.2, 41.6), (-7.0, 39.5), (-7.4, 37.2)],
    &[
        (2.5, 51.1), (4.0, 49.9), (6.0, 49.5), (8.2, 49.0), (7.6, 47.6),
        (6.0, 46.2), (7.0, 45.3), (7.5, 43.8),
    ],
    &[(7.6, 47.6), (10.0, 47.5), (13.0, 47.5), (13.8, 48.7), (12.0, 50.3), (14.6, 51.0), (14.2, 53.9)],
    &[(23.5, 54.0), (23.9, 52.0), (22.6, 49.1)],
    &[
        (27.7, 57.5), (28.2, 56.0), (30.9, 55.6), (31.8, 52.1), (35.0, 52.0),
        (40.0, 49.6), (38.3, 47.1),
    ],
    &[(28.0, 60.5), (30.0, 61.7), (29.6, 64.0), (30.0, 67.7), (28.7, 69.0)],
    &[
        (11.4, 59.0), (12.5, 61.0), (12.0, 63.0), (14.0, 64.5), (16.0, 68.0),
        (18.0, 68.5), (20.5, 69.0),
    ],
    // Asia
    &[
        (47.0, 46.0), (49.0, 48.0), (52.0, 51.6), (61.0, 51.0), (69.0, 55.0),
        (77.0, 54.0), (87.0, 49.2),
    ],
    &[
        (87.0, 49.2), (98.0, 52.0), (107.0, 50.0), (117.0, 49.5), (120.0, 53.3),
        (127.0, 49.7), (131.0, 47.7), (134.7, 48.3), (133.0, 45.0), (131.0, 42.9),
    ],
    &[
        (87.8, 49.1), (91.0, 45.5), (96.0, 42.7), (105.0, 41.6), (111.8, 43.7),
        (116.0, 45.0), (119.9, 46.7), (115.5, 47.8), (117.0, 49.5),
    ],
    &[(80.2, 42.1), (80.5, 45.0), (82.5, 45.3), (83.0, 47.2), (85.5, 47.0), (87.0, 49.2)],
    &[
        (52.0, 42.0), (56.0, 41.3), (59.0, 42.3), (62.0, 43.5), (66.0, 42.0),
        (68.0, 40.6), (71.0, 42.3), (74.0, 43.2), (80.2, 42.1),
    ],
    &[(53.9, 37.3), (57.0, 38.0), (60.0, 37.0), (61.2, 35.6), (63.0, 35.8), (66.5, 37.4), (70.0, 37.5), (71.5, 36.5)],
    &[
        (74.5, 37.0), (77.8, 35.5), (79.0, 32.5), (81.0, 30.0), (88.0, 28.0),
        (92.0, 27.8), (97.0, 28.3),
    ],
    &[(74.5, 37.0), (74.7, 32.5), (74.5, 31.0), (71.0, 28.0), (70.0, 25.7), (68.2, 23.7)],
    &[
        (74.5, 37.0), (71.5, 36.5), (70.0, 34.0), (69.3, 31.9), (66.5, 29.9),
        (61.0, 29.5), (61.6, 25.2),
    ],
    &[(61.0, 29.5), (60.8, 34.3), (61.2, 35.6)],
    &[(88.1, 26.5), (89.0, 25.0), (88.5, 22.0)],
    &[(92.6, 21.3), (92.3, 23.7), (93.3, 25.0), (95.0, 26.5), (97.0, 28.3)],
    &[(97.0, 28.3), (98.5, 24.5), (100.0, 21.5), (102.0, 22.3), (105.5, 23.2), (108.0, 21.5)],
    &[(102.2, 22.4), (104.5, 18.5), (107.5, 14.5), (106.0, 11.0), (104.5, 10.4)],
    &[(100.0, 20.4), (101.0, 17.8), (104.7, 16.2), (105.5, 14.3), (102.5, 12.2)],
    &[(100.0, 20.4), (98.5, 17.0), (99.5, 12.5), (98.6, 10.0)],
    &[(100.2, 6.5), (101.9, 5.8)],
    &[(126.1, 37.7), (128.4, 38.6)],
    &[(124.3, 40.0), (128.0, 42.0), (130.6, 42.4)],
    // Middle East
    &[(36.2, 36.2), (37.0, 36.7), (42.3, 37.1), (44.8, 37.2), (44.3, 37.9), (44.8, 39.7)],
    &[(45.5, 35.5), (46.0, 33.0), (48.0, 30.5)],
    &[(42.3, 37.1), (41.0, 34.4), (38.8, 33.4)],
    &[(34.9, 29.4), (39.0, 32.0), (44.7, 29.2), (47.5, 29.0), (48.0, 28.0)],
    &[(42.8, 16.5), (47.0, 16.9), (52.0, 19.0), (55.0, 20.0), (55.7, 22.7)],
    // Africa
    &[(-1.7, 35.0), (-2.0, 32.5), (-5.0, 30.0), (-8.7, 28.7), (-8.7, 27.6)],
    &[
        (-8.7, 27.6), (-8.7, 26.0), (-12.0, 26.0), (-12.0, 23.4), (-13.0, 21.3),
        (-17.0, 21.3),
    ],
    &[(8.4, 36.9), (8.2, 34.5), (9.5, 30.2), (10.0, 25.0), (12.0, 23.5)],
    &[(25.0, 31.6), (25.0, 22.0), (36.9, 22.0)],
    &[(12.0, 23.5), (16.0, 23.4), (24.0, 19.5), (25.0, 20.0), (25.0, 22.0)],
    &[(-12.0, 14.7), (-11.5, 15.5), (-5.5, 15.5), (-6.0, 24.9), (-4.8, 25.0)],
    &[(-4.8, 25.0), (1.2, 20.8), (4.2, 19.2), (5.8, 19.4), (12.0, 23.5)],
    &[(2.7, 12.0), (3.6, 11.7), (4.0, 13.5), (8.0, 13.2), (13.6, 13.4)],
    &[
        (24.0, 19.5), (23.8, 15.6), (22.5, 14.0), (22.0, 12.7), (23.9, 8.6),
        (27.5, 9.5), (30.0, 10.3), (33.0, 12.0), (34.0, 9.5),
    ],
    &[(36.5, 14.3), (36.5, 12.0), (34.0, 9.5), (35.3, 5.5), (41.9, 4.0), (43.0, 5.0), (47.9, 8.0)],
    &[(34.0, -1.0), (37.5, -3.5), (39.2, -4.7)],
    &[(41.0, -1.6), (41.0, 3.9)],
    &[
        (16.5, -28.6), (20.0, -24.8), (20.0, -22.0), (26.0, -24.5), (29.4, -22.1),
        (31.3, -22.4), (32.0, -26.8),
    ],
    &[(11.7, -17.2), (13.5, -17.0), (18.5, -17.4), (23.4, -17.6), (25.3, -17.8)],
    &[(12.2, -6.0), (16.5, -6.9), (18.0, -8.0), (21.8, -7.3), (22.0, -11.0), (24.0, -11.0)],
    &[(24.0, -11.0), (27.5, -12.0), (29.5, -13.2), (28.8, -8.5), (30.5, -8.3)],
    &[(31.3, -22.4), (33.0, -19.0), (32.8, -16.7), (30.4, -15.6), (33.2, -14.0), (34.9, -11.5), (40.4, -10.5)],
    &[(-3.0, 5.1), (-2.6, 11.0), (0.0, 11.0), (1.2, 6.1)],
    &[(-7.5, 4.4), (-8.5, 7.7), (-8.2, 10.2), (-5.5, 10.4), (-2.8, 9.6)],
    &[(8.6, 4.5), (10.0, 7.0), (12.2, 8.5), (14.5, 12.8)],
];
