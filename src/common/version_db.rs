//! ISO/IEC 18004 lookup tables, indexed by `version - 1` and by `ECLevel as usize`
//! (L, M, Q, H). Every entry is a literal from the standard.

use super::ec::BlockGroup;

const fn g(count: usize, total: usize, data: usize) -> BlockGroup {
    BlockGroup { count, total, data }
}

// Error correction blocks
//------------------------------------------------------------------------------

// (block count, codewords per block, data codewords per block) for both groups
pub(crate) static BLOCK_GROUPS: [[[BlockGroup; 2]; 40]; 4] = [
    // L
    [
        [g( 1,  26,  19), g( 0,   0,   0)], // 1
        [g( 1,  44,  34), g( 0,   0,   0)], // 2
        [g( 1,  70,  55), g( 0,   0,   0)], // 3
        [g( 1, 100,  80), g( 0,   0,   0)], // 4
        [g( 1, 134, 108), g( 0,   0,   0)], // 5
        [g( 2,  86,  68), g( 0,   0,   0)], // 6
        [g( 2,  98,  78), g( 0,   0,   0)], // 7
        [g( 2, 121,  97), g( 0,   0,   0)], // 8
        [g( 2, 146, 116), g( 0,   0,   0)], // 9
        [g( 2,  86,  68), g( 2,  87,  69)], // 10
        [g( 4, 101,  81), g( 0,   0,   0)], // 11
        [g( 2, 116,  92), g( 2, 117,  93)], // 12
        [g( 4, 133, 107), g( 0,   0,   0)], // 13
        [g( 3, 145, 115), g( 1, 146, 116)], // 14
        [g( 5, 109,  87), g( 1, 110,  88)], // 15
        [g( 5, 122,  98), g( 1, 123,  99)], // 16
        [g( 1, 135, 107), g( 5, 136, 108)], // 17
        [g( 5, 150, 120), g( 1, 151, 121)], // 18
        [g( 3, 141, 113), g( 4, 142, 114)], // 19
        [g( 3, 135, 107), g( 5, 136, 108)], // 20
        [g( 4, 144, 116), g( 4, 145, 117)], // 21
        [g( 2, 139, 111), g( 7, 140, 112)], // 22
        [g( 4, 151, 121), g( 5, 152, 122)], // 23
        [g( 6, 147, 117), g( 4, 148, 118)], // 24
        [g( 8, 132, 106), g( 4, 133, 107)], // 25
        [g(10, 142, 114), g( 2, 143, 115)], // 26
        [g( 8, 152, 122), g( 4, 153, 123)], // 27
        [g( 3, 147, 117), g(10, 148, 118)], // 28
        [g( 7, 146, 116), g( 7, 147, 117)], // 29
        [g( 5, 145, 115), g(10, 146, 116)], // 30
        [g(13, 145, 115), g( 3, 146, 116)], // 31
        [g(17, 145, 115), g( 0,   0,   0)], // 32
        [g(17, 145, 115), g( 1, 146, 116)], // 33
        [g(13, 145, 115), g( 6, 146, 116)], // 34
        [g(12, 151, 121), g( 7, 152, 122)], // 35
        [g( 6, 151, 121), g(14, 152, 122)], // 36
        [g(17, 152, 122), g( 4, 153, 123)], // 37
        [g( 4, 152, 122), g(18, 153, 123)], // 38
        [g(20, 147, 117), g( 4, 148, 118)], // 39
        [g(19, 148, 118), g( 6, 149, 119)], // 40
    ],
    // M
    [
        [g( 1,  26,  16), g( 0,   0,   0)], // 1
        [g( 1,  44,  28), g( 0,   0,   0)], // 2
        [g( 1,  70,  44), g( 0,   0,   0)], // 3
        [g( 2,  50,  32), g( 0,   0,   0)], // 4
        [g( 2,  67,  43), g( 0,   0,   0)], // 5
        [g( 4,  43,  27), g( 0,   0,   0)], // 6
        [g( 4,  49,  31), g( 0,   0,   0)], // 7
        [g( 2,  60,  38), g( 2,  61,  39)], // 8
        [g( 3,  58,  36), g( 2,  59,  37)], // 9
        [g( 4,  69,  43), g( 1,  70,  44)], // 10
        [g( 1,  80,  50), g( 4,  81,  51)], // 11
        [g( 6,  58,  36), g( 2,  59,  37)], // 12
        [g( 8,  59,  37), g( 1,  60,  38)], // 13
        [g( 4,  64,  40), g( 5,  65,  41)], // 14
        [g( 5,  65,  41), g( 5,  66,  42)], // 15
        [g( 7,  73,  45), g( 3,  74,  46)], // 16
        [g(10,  74,  46), g( 1,  75,  47)], // 17
        [g( 9,  69,  43), g( 4,  70,  44)], // 18
        [g( 3,  70,  44), g(11,  71,  45)], // 19
        [g( 3,  67,  41), g(13,  68,  42)], // 20
        [g(17,  68,  42), g( 0,   0,   0)], // 21
        [g(17,  74,  46), g( 0,   0,   0)], // 22
        [g( 4,  75,  47), g(14,  76,  48)], // 23
        [g( 6,  73,  45), g(14,  74,  46)], // 24
        [g( 8,  75,  47), g(13,  76,  48)], // 25
        [g(19,  74,  46), g( 4,  75,  47)], // 26
        [g(22,  73,  45), g( 3,  74,  46)], // 27
        [g( 3,  73,  45), g(23,  74,  46)], // 28
        [g(21,  73,  45), g( 7,  74,  46)], // 29
        [g(19,  75,  47), g(10,  76,  48)], // 30
        [g( 2,  74,  46), g(29,  75,  47)], // 31
        [g(10,  74,  46), g(23,  75,  47)], // 32
        [g(14,  74,  46), g(21,  75,  47)], // 33
        [g(14,  74,  46), g(23,  75,  47)], // 34
        [g(12,  75,  47), g(26,  76,  48)], // 35
        [g( 6,  75,  47), g(34,  76,  48)], // 36
        [g(29,  74,  46), g(14,  75,  47)], // 37
        [g(13,  74,  46), g(32,  75,  47)], // 38
        [g(40,  75,  47), g( 7,  76,  48)], // 39
        [g(18,  75,  47), g(31,  76,  48)], // 40
    ],
    // Q
    [
        [g( 1,  26,  13), g( 0,   0,   0)], // 1
        [g( 1,  44,  22), g( 0,   0,   0)], // 2
        [g( 2,  35,  17), g( 0,   0,   0)], // 3
        [g( 2,  50,  24), g( 0,   0,   0)], // 4
        [g( 2,  33,  15), g( 2,  34,  16)], // 5
        [g( 4,  43,  19), g( 0,   0,   0)], // 6
        [g( 2,  32,  14), g( 4,  33,  15)], // 7
        [g( 4,  40,  18), g( 2,  41,  19)], // 8
        [g( 4,  36,  16), g( 4,  37,  17)], // 9
        [g( 6,  43,  19), g( 2,  44,  20)], // 10
        [g( 4,  50,  22), g( 4,  51,  23)], // 11
        [g( 4,  46,  20), g( 6,  47,  21)], // 12
        [g( 8,  44,  20), g( 4,  45,  21)], // 13
        [g(11,  36,  16), g( 5,  37,  17)], // 14
        [g( 5,  54,  24), g( 7,  55,  25)], // 15
        [g(15,  43,  19), g( 2,  44,  20)], // 16
        [g( 1,  50,  22), g(15,  51,  23)], // 17
        [g(17,  50,  22), g( 1,  51,  23)], // 18
        [g(17,  47,  21), g( 4,  48,  22)], // 19
        [g(15,  54,  24), g( 5,  55,  25)], // 20
        [g(17,  50,  22), g( 6,  51,  23)], // 21
        [g( 7,  54,  24), g(16,  55,  25)], // 22
        [g(11,  54,  24), g(14,  55,  25)], // 23
        [g(11,  54,  24), g(16,  55,  25)], // 24
        [g( 7,  54,  24), g(22,  55,  25)], // 25
        [g(28,  50,  22), g( 6,  51,  23)], // 26
        [g( 8,  53,  23), g(26,  54,  24)], // 27
        [g( 4,  54,  24), g(31,  55,  25)], // 28
        [g( 1,  53,  23), g(37,  54,  24)], // 29
        [g(15,  54,  24), g(25,  55,  25)], // 30
        [g(42,  54,  24), g( 1,  55,  25)], // 31
        [g(10,  54,  24), g(35,  55,  25)], // 32
        [g(29,  54,  24), g(19,  55,  25)], // 33
        [g(44,  54,  24), g( 7,  55,  25)], // 34
        [g(39,  54,  24), g(14,  55,  25)], // 35
        [g(46,  54,  24), g(10,  55,  25)], // 36
        [g(49,  54,  24), g(10,  55,  25)], // 37
        [g(48,  54,  24), g(14,  55,  25)], // 38
        [g(43,  54,  24), g(22,  55,  25)], // 39
        [g(34,  54,  24), g(34,  55,  25)], // 40
    ],
    // H
    [
        [g( 1,  26,   9), g( 0,   0,   0)], // 1
        [g( 1,  44,  16), g( 0,   0,   0)], // 2
        [g( 2,  35,  13), g( 0,   0,   0)], // 3
        [g( 4,  25,   9), g( 0,   0,   0)], // 4
        [g( 2,  33,  11), g( 2,  34,  12)], // 5
        [g( 4,  43,  15), g( 0,   0,   0)], // 6
        [g( 4,  39,  13), g( 1,  40,  14)], // 7
        [g( 4,  40,  14), g( 2,  41,  15)], // 8
        [g( 4,  36,  12), g( 4,  37,  13)], // 9
        [g( 6,  43,  15), g( 2,  44,  16)], // 10
        [g( 3,  36,  12), g( 8,  37,  13)], // 11
        [g( 7,  42,  14), g( 4,  43,  15)], // 12
        [g(12,  33,  11), g( 4,  34,  12)], // 13
        [g(11,  36,  12), g( 5,  37,  13)], // 14
        [g(11,  36,  12), g( 7,  37,  13)], // 15
        [g( 3,  45,  15), g(13,  46,  16)], // 16
        [g( 2,  42,  14), g(17,  43,  15)], // 17
        [g( 2,  42,  14), g(19,  43,  15)], // 18
        [g( 9,  39,  13), g(16,  40,  14)], // 19
        [g(15,  43,  15), g(10,  44,  16)], // 20
        [g(19,  46,  16), g( 6,  47,  17)], // 21
        [g(34,  37,  13), g( 0,   0,   0)], // 22
        [g(16,  45,  15), g(14,  46,  16)], // 23
        [g(30,  46,  16), g( 2,  47,  17)], // 24
        [g(22,  45,  15), g(13,  46,  16)], // 25
        [g(33,  46,  16), g( 4,  47,  17)], // 26
        [g(12,  45,  15), g(28,  46,  16)], // 27
        [g(11,  45,  15), g(31,  46,  16)], // 28
        [g(19,  45,  15), g(26,  46,  16)], // 29
        [g(23,  45,  15), g(25,  46,  16)], // 30
        [g(23,  45,  15), g(28,  46,  16)], // 31
        [g(19,  45,  15), g(35,  46,  16)], // 32
        [g(11,  45,  15), g(46,  46,  16)], // 33
        [g(59,  46,  16), g( 1,  47,  17)], // 34
        [g(22,  45,  15), g(41,  46,  16)], // 35
        [g( 2,  45,  15), g(64,  46,  16)], // 36
        [g(24,  45,  15), g(46,  46,  16)], // 37
        [g(42,  45,  15), g(32,  46,  16)], // 38
        [g(10,  45,  15), g(67,  46,  16)], // 39
        [g(20,  45,  15), g(61,  46,  16)], // 40
    ],
];

pub(crate) static TOTAL_CODEWORDS: [usize; 40] = [
      26,   44,   70,  100,  134,  172,  196,  242,  292,  346,
     404,  466,  532,  581,  655,  733,  815,  901,  991, 1085,
    1156, 1258, 1364, 1474, 1588, 1706, 1828, 1921, 2051, 2185,
    2323, 2465, 2611, 2761, 2876, 3034, 3196, 3362, 3532, 3706,
];

pub(crate) static DATA_CODEWORDS: [[usize; 40]; 4] = [
    // L
    [
          19,   34,   55,   80,  108,  136,  156,  194,  232,  274,
         324,  370,  428,  461,  523,  589,  647,  721,  795,  861,
         932, 1006, 1094, 1174, 1276, 1370, 1468, 1531, 1631, 1735,
        1843, 1955, 2071, 2191, 2306, 2434, 2566, 2702, 2812, 2956,
    ],
    // M
    [
          16,   28,   44,   64,   86,  108,  124,  154,  182,  216,
         254,  290,  334,  365,  415,  453,  507,  563,  627,  669,
         714,  782,  860,  914, 1000, 1062, 1128, 1193, 1267, 1373,
        1455, 1541, 1631, 1725, 1812, 1914, 1992, 2102, 2216, 2334,
    ],
    // Q
    [
          13,   22,   34,   48,   62,   76,   88,  110,  132,  154,
         180,  206,  244,  261,  295,  325,  367,  397,  445,  485,
         512,  568,  614,  664,  718,  754,  808,  871,  911,  985,
        1033, 1115, 1171, 1231, 1286, 1354, 1426, 1502, 1582, 1666,
    ],
    // H
    [
           9,   16,   26,   36,   46,   60,   66,   86,  100,  122,
         140,  158,  180,  197,  223,  253,  283,  313,  341,  385,
         406,  442,  464,  514,  538,  596,  628,  661,  701,  745,
         793,  845,  901,  961,  986, 1054, 1096, 1142, 1222, 1276,
    ],
];

// Byte mode capacity: data codewords minus mode and character count overhead
pub(crate) static BYTE_CAPACITY: [[usize; 40]; 4] = [
    // L
    [
          17,   32,   53,   78,  106,  134,  154,  192,  230,  271,
         321,  367,  425,  458,  520,  586,  644,  718,  792,  858,
         929, 1003, 1091, 1171, 1273, 1367, 1465, 1528, 1628, 1732,
        1840, 1952, 2068, 2188, 2303, 2431, 2563, 2699, 2809, 2953,
    ],
    // M
    [
          14,   26,   42,   62,   84,  106,  122,  152,  180,  213,
         251,  287,  331,  362,  412,  450,  504,  560,  624,  666,
         711,  779,  857,  911,  997, 1059, 1125, 1190, 1264, 1370,
        1452, 1538, 1628, 1722, 1809, 1911, 1989, 2099, 2213, 2331,
    ],
    // Q
    [
          11,   20,   32,   46,   60,   74,   86,  108,  130,  151,
         177,  203,  241,  258,  292,  322,  364,  394,  442,  482,
         509,  565,  611,  661,  715,  751,  805,  868,  908,  982,
        1030, 1112, 1168, 1228, 1283, 1351, 1423, 1499, 1579, 1663,
    ],
    // H
    [
           7,   14,   24,   34,   44,   58,   64,   84,   98,  119,
         137,  155,  177,  194,  220,  250,  280,  310,  338,  382,
         403,  439,  461,  511,  535,  593,  625,  658,  698,  742,
         790,  842,  898,  958,  983, 1051, 1093, 1139, 1219, 1273,
    ],
];

// Function patterns
//------------------------------------------------------------------------------

pub(crate) static ALIGNMENT_PATTERN_POSITIONS: [&[i16]; 40] = [
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
    &[6, 30, 54],
    &[6, 32, 58],
    &[6, 34, 62],
    &[6, 26, 46, 66],
    &[6, 26, 48, 70],
    &[6, 26, 50, 74],
    &[6, 30, 54, 78],
    &[6, 30, 56, 82],
    &[6, 30, 58, 86],
    &[6, 34, 62, 90],
    &[6, 28, 50, 72, 94],
    &[6, 26, 50, 74, 98],
    &[6, 30, 54, 78, 102],
    &[6, 28, 54, 80, 106],
    &[6, 32, 58, 84, 110],
    &[6, 30, 58, 86, 114],
    &[6, 34, 62, 90, 118],
    &[6, 26, 50, 74, 98, 122],
    &[6, 30, 54, 78, 102, 126],
    &[6, 26, 52, 78, 104, 130],
    &[6, 30, 56, 82, 108, 134],
    &[6, 34, 60, 86, 112, 138],
    &[6, 30, 58, 86, 114, 142],
    &[6, 34, 62, 90, 118, 146],
    &[6, 30, 54, 78, 102, 126, 150],
    &[6, 24, 50, 76, 102, 128, 154],
    &[6, 28, 54, 80, 106, 132, 158],
    &[6, 32, 58, 84, 110, 136, 162],
    &[6, 26, 54, 82, 110, 138, 166],
    &[6, 30, 58, 86, 114, 142, 170],
];

pub(crate) static REMAINDER_BITS: [usize; 40] = [
    0, 7, 7, 7, 7, 7, 0, 0, 0, 0, //
    0, 0, 0, 3, 3, 3, 3, 3, 3, 3, //
    4, 4, 4, 4, 4, 4, 4, 3, 3, 3, //
    3, 3, 3, 3, 0, 0, 0, 0, 0, 0, //
];

// Format & version info
//------------------------------------------------------------------------------

pub(crate) const FORMAT_INFO_BIT_LEN: usize = 15;

pub(crate) const VERSION_INFO_BIT_LEN: usize = 18;

// BCH(15, 5) words, masked with 0x5412, indexed by level then mask pattern
pub(crate) static FORMAT_INFO: [[u32; 8]; 4] = [
    [0x77C4, 0x72F3, 0x7DAA, 0x789D, 0x662F, 0x6318, 0x6C41, 0x6976], // L
    [0x5412, 0x5125, 0x5E7C, 0x5B4B, 0x45F9, 0x40CE, 0x4F97, 0x4AA0], // M
    [0x355F, 0x3068, 0x3F31, 0x3A06, 0x24B4, 0x2183, 0x2EDA, 0x2BED], // Q
    [0x1689, 0x13BE, 0x1CE7, 0x19D0, 0x0762, 0x0255, 0x0D0C, 0x083B], // H
];

// BCH(18, 6) words, zero below version 7
pub(crate) static VERSION_INFO: [u32; 40] = [
    0x00000, 0x00000, 0x00000, 0x00000, 0x00000, 0x00000, 0x07C94, 0x085BC, 0x09A99, 0x0A4D3,
    0x0BBF6, 0x0C762, 0x0D847, 0x0E60D, 0x0F928, 0x10B78, 0x1145D, 0x12A17, 0x13532, 0x149A6,
    0x15683, 0x168C9, 0x177EC, 0x18EC4, 0x191E1, 0x1AFAB, 0x1B08E, 0x1CC1A, 0x1D33F, 0x1ED75,
    0x1F250, 0x209D5, 0x216F0, 0x228BA, 0x2379F, 0x24B0B, 0x2542E, 0x26A64, 0x27541, 0x28C69,
];

// Data encoding
//------------------------------------------------------------------------------

pub(crate) static PADDING_CODEWORDS: [u8; 2] = [0xEC, 0x11];
