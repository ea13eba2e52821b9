#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowsCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnsCount(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowIndex(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnIndex(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct NodesCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct EdgesCount(pub usize);

/// World space length of one cell along the x axis.
#[derive(PartialEq, PartialOrd, Copy, Clone, Debug)]
pub struct UnitWidth(pub f64);
/// World space length of one cell along the y axis.
#[derive(PartialEq, PartialOrd, Copy, Clone, Debug)]
pub struct UnitHeight(pub f64);

#[derive(PartialEq, PartialOrd, Copy, Clone, Debug)]
pub struct Width(pub f64);
#[derive(PartialEq, PartialOrd, Copy, Clone, Debug)]
pub struct Height(pub f64);
