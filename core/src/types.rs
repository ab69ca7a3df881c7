use ndarray::Array2;

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`, `x` being the column and `y` the row.
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

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    (a as CellCount).saturating_mul(b as CellCount)
}

/// Size of an array shaped `[x, y]`, in board coordinates.
pub(crate) fn array_size<T>(array: &Array2<T>) -> Coord2 {
    let (x, y) = array.dim();
    (
        x.try_into().unwrap_or(Coord::MAX),
        y.try_into().unwrap_or(Coord::MAX),
    )
}

/// Inclusive span `center - 1 ..= center + 1`, clipped to `0 .. len`.
fn span(center: Coord, len: Coord) -> core::ops::RangeInclusive<Coord> {
    let last = len.saturating_sub(1);
    center.saturating_sub(1)..=center.saturating_add(1).min(last)
}

/// Moore neighborhood of `center` inside a board of `bounds`, row by row.
pub fn neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    let xs = span(center.0, bounds.0);
    span(center.1, bounds.1)
        .flat_map(move |y| xs.clone().map(move |x| (x, y)))
        .filter(move |&pos| pos != center)
}
