//! Known perft results for chess position verification.
//!
//! Expected node counts from Stockfish and other established engines at
//! various depths. Move generation must match these exactly to be
//! considered correct. Divide breakdowns are kept only where the published
//! per-move counts sum to the published total.

/// Expected per-root-move subtree counts at one depth.
#[derive(Clone, Copy, Debug)]
pub struct DivideReference {
    pub depth: u32,
    pub moves: &'static [(&'static str, u64)],
}

/// One reference position: FEN, description, expected totals per depth and
/// optional divide breakdowns at selected depths.
#[derive(Clone, Copy, Debug)]
pub struct ReferenceEntry {
    pub name: &'static str,
    pub fen: &'static str,
    pub description: &'static str,
    pub depths: &'static [(u32, u64)],
    pub divides: &'static [DivideReference],
}

impl ReferenceEntry {
    /// The expected node count at a depth, if the dataset has one.
    #[must_use]
    pub fn expected_nodes(&self, depth: u32) -> Option<u64> {
        self.depths
            .iter()
            .find(|&&(d, _)| d == depth)
            .map(|&(_, nodes)| nodes)
    }

    /// The expected divide breakdown at a depth, if the dataset has one.
    #[must_use]
    pub fn divide_reference(&self, depth: u32) -> Option<&'static DivideReference> {
        self.divides.iter().find(|r| r.depth == depth)
    }

    /// Depths with reference totals, ascending.
    #[must_use]
    pub fn depths_up_to(&self, max_depth: u32) -> Vec<u32> {
        let mut depths: Vec<u32> = self
            .depths
            .iter()
            .map(|&(d, _)| d)
            .filter(|&d| d <= max_depth)
            .collect();
        depths.sort_unstable();
        depths
    }

    /// The deepest depth with a reference total.
    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.depths.iter().map(|&(d, _)| d).max().unwrap_or(0)
    }
}

/// Look up a reference position by name.
#[must_use]
pub fn find_position(name: &str) -> Option<&'static ReferenceEntry> {
    REFERENCE_POSITIONS.iter().find(|e| e.name == name)
}

/// Position names for the quick verification subset.
pub const QUICK_POSITIONS: &[&str] = &[
    "starting_position",
    "en_passant_position",
    "castling_position",
    "position_5",
];

/// Standard perft test positions with known results from trusted engines.
pub const REFERENCE_POSITIONS: &[ReferenceEntry] = &[
    ReferenceEntry {
        name: "starting_position",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        description: "Standard chess starting position",
        depths: &[
            (1, 20),
            (2, 400),
            (3, 8902),
            (4, 197_281),
            (5, 4_865_609),
            (6, 119_060_324),
        ],
        divides: &[DivideReference {
            depth: 3,
            moves: &[
                ("a2a3", 380),
                ("b2b3", 420),
                ("c2c3", 420),
                ("d2d3", 539),
                ("e2e3", 599),
                ("f2f3", 380),
                ("g2g3", 420),
                ("h2h3", 380),
                ("a2a4", 420),
                ("b2b4", 421),
                ("c2c4", 441),
                ("d2d4", 560),
                ("e2e4", 600),
                ("f2f4", 401),
                ("g2g4", 421),
                ("h2h4", 420),
                ("b1a3", 400),
                ("b1c3", 440),
                ("g1f3", 440),
                ("g1h3", 400),
            ],
        }],
    },
    ReferenceEntry {
        name: "en_passant_position",
        fen: "rnbqkbnr/pppp1ppp/8/4p3/3P4/8/PPP2PPP/RNBQKBNR b KQkq d3 0 2",
        description: "Position with en passant capture available",
        depths: &[(1, 31), (2, 1137), (3, 35_522), (4, 734_582)],
        divides: &[DivideReference {
            depth: 3,
            moves: &[
                ("e5e4", 1102),
                ("a7a6", 1129),
                ("b7b6", 1200),
                ("c7c6", 1205),
                ("d7d6", 1251),
                ("f7f6", 992),
                ("g7g6", 1203),
                ("h7h6", 1129),
                ("a7a5", 1203),
                ("b7b5", 1172),
                ("c7c5", 1190),
                ("d7d5", 1364),
                ("f7f5", 1136),
                ("g7g5", 1099),
                ("h7h5", 1205),
                ("e5d4", 1072),
                ("b8a6", 1162),
                ("b8c6", 1242),
                ("g8f6", 1091),
                ("g8h6", 1125),
                ("g8e7", 901),
                ("f8a3", 1193),
                ("f8b4", 209),
                ("f8c5", 1268),
                ("f8d6", 1129),
                ("f8e7", 1089),
                ("d8h4", 1445),
                ("d8g5", 1469),
                ("d8f6", 1502),
                ("d8e7", 1128),
                ("e8e7", 917),
            ],
        }],
    },
    ReferenceEntry {
        name: "castling_position",
        fen: "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
        description: "Castling rights position",
        depths: &[(1, 26), (2, 568), (3, 13_744), (4, 314_346), (5, 7_594_526)],
        divides: &[],
    },
    ReferenceEntry {
        name: "promotion_position",
        fen: "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
        description: "Pawn promotion position",
        depths: &[(1, 24), (2, 496), (3, 9483), (4, 182_838), (5, 3_605_103)],
        divides: &[],
    },
    ReferenceEntry {
        name: "complex_position",
        fen: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        description: "Complex position (promotions, captures, castling, checks)",
        depths: &[(1, 6), (2, 264), (3, 9467), (4, 422_333), (5, 15_833_292)],
        divides: &[],
    },
    ReferenceEntry {
        name: "kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        description: "Kiwipete (Peter McKenzie position)",
        depths: &[
            (1, 48),
            (2, 2039),
            (3, 97_862),
            (4, 4_085_603),
            (5, 193_690_690),
        ],
        divides: &[],
    },
    ReferenceEntry {
        name: "position_3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        description: "Endgame position with pawn races",
        depths: &[
            (1, 14),
            (2, 191),
            (3, 2812),
            (4, 43_238),
            (5, 674_624),
            (6, 11_030_083),
            (7, 178_633_661),
        ],
        divides: &[],
    },
    ReferenceEntry {
        name: "position_4",
        fen: "r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1",
        description: "Castling rights position (Black to move)",
        depths: &[
            (1, 26),
            (2, 568),
            (3, 13_744),
            (4, 314_346),
            (5, 7_594_526),
            (6, 179_862_938),
        ],
        divides: &[],
    },
    ReferenceEntry {
        name: "position_5",
        fen: "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        description: "Complex middlegame position",
        depths: &[(1, 44), (2, 1486), (3, 62_379), (4, 2_103_487), (5, 89_941_194)],
        divides: &[],
    },
    ReferenceEntry {
        name: "position_6",
        fen: "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
        description: "Symmetric middlegame position",
        depths: &[(1, 46), (2, 2079), (3, 89_890), (4, 3_894_594), (5, 164_075_551)],
        divides: &[],
    },
    ReferenceEntry {
        name: "tricky_position",
        fen: "rnbqkb1r/pp1p1ppp/5n2/2pP4/2P5/8/PP2PPPP/RNBQKBNR w KQkq c6 0 3",
        description: "Position with en passant opportunity",
        depths: &[
            (1, 31),
            (2, 570),
            (3, 17_546),
            (4, 351_806),
            (5, 11_139_762),
            (6, 244_063_299),
        ],
        divides: &[],
    },
];
