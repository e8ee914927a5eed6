//! Marching cubes over a zero-padded scalar field.
//!
//! The traversal keeps a two-plane slab of edge vertex indices (modular z)
//! so every iso-crossing vertex is computed exactly once and shared between
//! the cells that touch it. The 256-entry triangle configuration table is
//! ported from the public-domain `MarchingCubeCpp` library.

// Grid coordinates and mesh indices stay well inside u32/f64 range
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]

use mesh_types::TriMesh;
use nalgebra::Point3;
use volume_grid::OccupancyMask;

/// A dense scalar field in volume layout `(x * ny + y) * nz + z`.
///
/// Built from an occupancy mask with a one-voxel zero border on every side,
/// which guarantees the extracted surface is closed for any finite mask.
pub(crate) struct ScalarGrid {
    pub dims: [usize; 3],
    pub values: Vec<f32>,
}

impl ScalarGrid {
    /// Copy a mask into a padded field (dimensions grow by 2 per axis).
    pub fn padded_from_mask(mask: &OccupancyMask) -> Self {
        let [nx, ny, nz] = mask.dims();
        let dims = [nx + 2, ny + 2, nz + 2];
        let mut values = vec![0.0_f32; dims[0] * dims[1] * dims[2]];
        for x in 0..nx {
            for y in 0..ny {
                for z in 0..nz {
                    if mask.get(x, y, z) {
                        values[((x + 1) * dims[1] + (y + 1)) * dims[2] + (z + 1)] = 1.0;
                    }
                }
            }
        }
        Self { dims, values }
    }

    #[inline]
    pub fn value(&self, x: usize, y: usize, z: usize) -> f32 {
        self.values[(x * self.dims[1] + y) * self.dims[2] + z]
    }
}

/// Extract the iso-surface of `grid` at `iso`.
///
/// Vertices are in grid coordinates; triangles are consistently wound
/// (facing the sub-iso region, i.e. inward for occupancy fields).
pub(crate) fn marching_cubes(grid: &ScalarGrid, iso: f32) -> TriMesh {
    Extraction::new(grid).run(iso)
}

/// Corner index pairs for the four parallel edges of each axis, in the
/// gather order expected by the configuration table (edges 0-3 along x,
/// 4-7 along y, 8-11 along z).
const EDGE_CORNERS: [[(usize, usize); 4]; 3] = [
    [(0, 1), (2, 3), (4, 5), (6, 7)],
    [(0, 2), (1, 3), (4, 6), (5, 7)],
    [(0, 4), (1, 5), (2, 6), (3, 7)],
];

/// Cell-relative offsets of those four edges along the two perpendicular
/// axes, in the same slot order as [`EDGE_CORNERS`].
const EDGE_OFFSETS: [(usize, usize); 4] = [(0, 0), (1, 0), (0, 1), (1, 1)];

struct Extraction<'a> {
    grid: &'a ScalarGrid,
    slab: Vec<[u32; 3]>,
    positions: Vec<Point3<f64>>,
    indices: Vec<u32>,
}

impl<'a> Extraction<'a> {
    fn new(grid: &'a ScalarGrid) -> Self {
        let slab_len = grid.dims[0] * grid.dims[1] * 2;
        Self {
            grid,
            slab: vec![[0; 3]; slab_len],
            positions: Vec::new(),
            indices: Vec::new(),
        }
    }

    fn run(mut self, iso: f32) -> TriMesh {
        let [nx, ny, nz] = self.grid.dims;
        let mut cell_edges = [0_u32; 12];

        for z in 0..nz - 1 {
            for y in 0..ny - 1 {
                for x in 0..nx - 1 {
                    // Corner values shifted so the surface sits at zero.
                    let vs = [
                        self.grid.value(x, y, z) - iso,
                        self.grid.value(x + 1, y, z) - iso,
                        self.grid.value(x, y + 1, z) - iso,
                        self.grid.value(x + 1, y + 1, z) - iso,
                        self.grid.value(x, y, z + 1) - iso,
                        self.grid.value(x + 1, y, z + 1) - iso,
                        self.grid.value(x, y + 1, z + 1) - iso,
                        self.grid.value(x + 1, y + 1, z + 1) - iso,
                    ];

                    let mut config = 0_usize;
                    for (bit, &v) in vs.iter().enumerate() {
                        if v < 0.0 {
                            config |= 1 << bit;
                        }
                    }
                    // Fully inside or fully outside
                    if config == 0 || config == 255 {
                        continue;
                    }

                    for (axis, corners) in EDGE_CORNERS.iter().enumerate() {
                        for (slot, &(ca, cb)) in corners.iter().enumerate() {
                            let (o1, o2) = EDGE_OFFSETS[slot];
                            let (ex, ey, ez) = match axis {
                                0 => (x, y + o1, z + o2),
                                1 => (x + o1, y, z + o2),
                                _ => (x + o1, y + o2, z),
                            };
                            // Low edges are owned by the first cell that sees
                            // them; high edges always belong to this cell.
                            let (p, q) = match axis {
                                0 => (y, z),
                                1 => (x, z),
                                _ => (x, y),
                            };
                            if (o1 == 1 || p == 0) && (o2 == 1 || q == 0) {
                                self.place_edge_vertex(vs[ca], vs[cb], axis, ex, ey, ez);
                            }
                            cell_edges[axis * 4 + slot] =
                                self.slab[self.slab_index(ex, ey, ez)][axis];
                        }
                    }

                    let mut entry = TRIANGLE_TABLE[config];
                    let triangle_count = (entry & 0xF) as usize;
                    entry >>= 4;
                    for _ in 0..triangle_count * 3 {
                        self.indices.push(cell_edges[(entry & 0xF) as usize]);
                        entry >>= 4;
                    }
                }
            }
        }

        let triangles = self
            .indices
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();
        TriMesh::from_parts(self.positions, triangles)
    }

    /// Interpolate the iso-crossing on one grid edge, if any, and record its
    /// vertex index in the slab.
    fn place_edge_vertex(&mut self, va: f32, vb: f32, axis: usize, x: usize, y: usize, z: usize) {
        if (va < 0.0) == (vb < 0.0) {
            return;
        }
        let mut p = Point3::new(x as f64, y as f64, z as f64);
        p.coords[axis] += f64::from(va / (va - vb));
        let idx = self.positions.len() as u32;
        let slot = self.slab_index(x, y, z);
        self.slab[slot][axis] = idx;
        self.positions.push(p);
    }

    /// Two-plane slab index: the z parity selects which plane a value lives in.
    #[inline]
    fn slab_index(&self, x: usize, y: usize, z: usize) -> usize {
        self.grid.dims[0] * self.grid.dims[1] * (z % 2) + y * self.grid.dims[0] + x
    }
}

/// Triangle configurations for all 256 corner sign patterns.
///
/// Each entry packs, 4 bits at a time from the low end: the triangle count,
/// then one edge index (0-11) per emitted triangle vertex. Ported from the
/// public-domain `MarchingCubeCpp` library.
#[rustfmt::skip]
static TRIANGLE_TABLE: [u64; 256] = [
    0, 33793, 36945, 159668546,
    18961, 144771090, 5851666, 595283255635,
    20913, 67640146, 193993474, 655980856339,
    88782242, 736732689667, 797430812739, 194554754,
    26657, 104867330, 136709522, 298069416227,
    109224258, 8877909667, 318136408323, 1567994331701604,
    189884450, 350847647843, 559958167731, 3256298596865604,
    447393122899, 651646838401572, 2538311371089956, 737032694307,
    29329, 43484162, 91358498, 374810899075,
    158485010, 178117478419, 88675058979, 433581536604804,
    158486962, 649105605635, 4866906995, 3220959471609924,
    649165714851, 3184943915608436, 570691368417972, 595804498035,
    124295042, 431498018963, 508238522371, 91518530,
    318240155763, 291789778348404, 1830001131721892, 375363605923,
    777781811075, 1136111028516116, 3097834205243396, 508001629971,
    2663607373704004, 680242583802939237, 333380770766129845, 179746658,
    42545, 138437538, 93365810, 713842853011,
    73602098, 69575510115, 23964357683, 868078761575828,
    28681778, 713778574611, 250912709379, 2323825233181284,
    302080811955, 3184439127991172, 1694042660682596, 796909779811,
    176306722, 150327278147, 619854856867, 1005252473234484,
    211025400963, 36712706, 360743481544788, 150627258963,
    117482600995, 1024968212107700, 2535169275963444, 4734473194086550421,
    628107696687956, 9399128243, 5198438490361643573, 194220594,
    104474994, 566996932387, 427920028243, 2014821863433780,
    492093858627, 147361150235284, 2005882975110676, 9671606099636618005,
    777701008947, 3185463219618820, 482784926917540, 2900953068249785909,
    1754182023747364, 4274848857537943333, 13198752741767688709, 2015093490989156,
    591272318771, 2659758091419812, 1531044293118596, 298306479155,
    408509245114388, 210504348563, 9248164405801223541, 91321106,
    2660352816454484, 680170263324308757, 8333659837799955077, 482966828984116,
    4274926723105633605, 3184439197724820, 192104450, 15217,
    45937, 129205250, 129208402, 529245952323,
    169097138, 770695537027, 382310500883, 2838550742137652,
    122763026, 277045793139, 81608128403, 1991870397907988,
    362778151475, 2059003085103236, 2132572377842852, 655681091891,
    58419234, 239280858627, 529092143139, 1568257451898804,
    447235128115, 679678845236084, 2167161349491220, 1554184567314086709,
    165479003923, 1428768988226596, 977710670185060, 10550024711307499077,
    1305410032576132, 11779770265620358997, 333446212255967269, 978168444447012,
    162736434, 35596216627, 138295313843, 891861543990356,
    692616541075, 3151866750863876, 100103641866564, 6572336607016932133,
    215036012883, 726936420696196, 52433666, 82160664963,
    2588613720361524, 5802089162353039525, 214799000387, 144876322,
    668013605731, 110616894681956, 1601657732871812, 430945547955,
    3156382366321172, 7644494644932993285, 3928124806469601813, 3155990846772900,
    339991010498708, 10743689387941597493, 5103845475, 105070898,
    3928064910068824213, 156265010, 1305138421793636, 27185,
    195459938, 567044449971, 382447549283, 2175279159592324,
    443529919251, 195059004769796, 2165424908404116, 1554158691063110021,
    504228368803, 1436350466655236, 27584723588724, 1900945754488837749,
    122971970, 443829749251, 302601798803, 108558722,
    724700725875, 43570095105972, 2295263717447940, 2860446751369014181,
    2165106202149444, 69275726195, 2860543885641537797, 2165106320445780,
    2280890014640004, 11820349930268368933, 8721082628082003989, 127050770,
    503707084675, 122834978, 2538193642857604, 10129,
    801441490467, 2923200302876740, 1443359556281892, 2901063790822564949,
    2728339631923524, 7103874718248233397, 12775311047932294245, 95520290,
    2623783208098404, 1900908618382410757, 137742672547, 2323440239468964,
    362478212387, 727199575803140, 73425410, 34337,
    163101314, 668566030659, 801204361987, 73030562,
    591509145619, 162574594, 100608342969108, 5553,
    724147968595, 1436604830452292, 176259090, 42001,
    143955266, 2385, 18433, 0,
];
