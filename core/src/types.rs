/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Number of cells on a board of `size`.
pub const fn area(size: Coord2) -> CellCount {
    size.0 as CellCount * size.1 as CellCount
}

/// In-bounds cells around `center` on a board of `size`, row by row.
///
/// The window is clamped to the board instead of wrapping, so edges yield 5 cells and corners 3.
pub fn neighbors(center: Coord2, size: Coord2) -> impl Iterator<Item = Coord2> {
    let (x, y) = center;
    let xs = x.saturating_sub(1)..=x.saturating_add(1).min(size.0.saturating_sub(1));
    let ys = y.saturating_sub(1)..=y.saturating_add(1).min(size.1.saturating_sub(1));

    ys.flat_map(move |ny| xs.clone().map(move |nx| (nx, ny)))
        .filter(move |&pos| pos != center)
}
