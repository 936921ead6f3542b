//! Package locations and bitsets over them.
//!
//! Packages are numbered `0..len` in ascending node order when a
//! [`PackageSet`] is built from per-node flags. A [`PackageMask`] is a set of
//! those package numbers; the numbering belongs to one input and is rebuilt
//! for every solve.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use thiserror::Error;

/// Set of package indices packed into a `u32`.
///
/// # Examples
/// ```
/// use courier_core::PackageMask;
///
/// let mask = PackageMask::EMPTY.with(0).with(2);
/// assert!(mask.contains(2));
/// assert!(!mask.contains(1));
/// assert_eq!(mask.len(), 2);
/// assert!((mask | PackageMask::single(1)).is_superset_of(PackageMask::full(3)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct PackageMask(u32);

impl PackageMask {
    /// Largest number of packages a mask can describe.
    pub const CAPACITY: usize = 31;

    /// The mask with no packages.
    pub const EMPTY: Self = Self(0);

    /// Mask containing packages `0..count`, clamped to [`Self::CAPACITY`].
    #[must_use]
    pub const fn full(count: usize) -> Self {
        let width = if count > Self::CAPACITY {
            Self::CAPACITY
        } else {
            count
        };
        Self((1_u32 << width) - 1)
    }

    /// Mask containing only `index`.
    #[must_use]
    pub const fn single(index: usize) -> Self {
        Self::EMPTY.with(index)
    }

    /// Add `index` to the mask. Indices at or beyond [`Self::CAPACITY`] are
    /// ignored.
    #[must_use]
    pub const fn with(self, index: usize) -> Self {
        if index >= Self::CAPACITY {
            return self;
        }
        Self(self.0 | (1_u32 << index))
    }

    /// Packages present in either mask.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Whether `index` is in the mask.
    #[must_use]
    pub const fn contains(self, index: usize) -> bool {
        index < Self::CAPACITY && self.0 & (1_u32 << index) != 0
    }

    /// Whether every package in `other` is also in `self`.
    #[must_use]
    pub const fn is_superset_of(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Number of packages in the mask.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Whether the mask has no packages.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Raw bits, package `i` at bit `i`.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// The mask as a dense table offset in `0..2^CAPACITY`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Rebuild a mask from a table offset produced by [`Self::index`].
    ///
    /// Returns `None` if `index` does not fit in the mask width.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index)
            .ok()
            .filter(|bits| *bits <= Self::full(Self::CAPACITY).0)
            .map(Self)
    }
}

impl BitOr for PackageMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOrAssign for PackageMask {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl fmt::Display for PackageMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#b}", self.0)
    }
}

/// Errors returned by [`PackageSet::from_flags`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackageSetError {
    /// A package flag was neither `0` nor `1`.
    #[error("package flag for node {node} must be 0 or 1, found {value}")]
    InvalidFlag {
        /// Node carrying the flag.
        node: usize,
        /// The rejected flag value.
        value: u8,
    },
    /// More packages than a [`PackageMask`] can hold.
    #[error("{count} packages exceed the mask capacity of {capacity}")]
    TooManyPackages {
        /// Number of flagged nodes.
        count: usize,
        /// Mask capacity.
        capacity: usize,
    },
}

/// Nodes that hold a package, in ascending node order.
///
/// # Examples
/// ```
/// use courier_core::{PackageMask, PackageSet};
///
/// let packages = PackageSet::from_flags(&[1, 0, 0, 1, 0, 1])?;
/// assert_eq!(packages.locations(), &[0, 3, 5]);
/// assert_eq!(packages.full_mask(), PackageMask::full(3));
/// # Ok::<(), courier_core::PackageSetError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackageSet {
    locations: Vec<usize>,
}

impl PackageSet {
    /// Collect package locations from one `0`/`1` flag per node.
    ///
    /// # Errors
    ///
    /// Returns [`PackageSetError::InvalidFlag`] for any flag other than `0`
    /// or `1`, and [`PackageSetError::TooManyPackages`] when more than
    /// [`PackageMask::CAPACITY`] nodes are flagged.
    pub fn from_flags(flags: &[u8]) -> Result<Self, PackageSetError> {
        let mut locations = Vec::new();
        for (node, &value) in flags.iter().enumerate() {
            match value {
                0 => {}
                1 => locations.push(node),
                _ => return Err(PackageSetError::InvalidFlag { node, value }),
            }
        }
        if locations.len() > PackageMask::CAPACITY {
            return Err(PackageSetError::TooManyPackages {
                count: locations.len(),
                capacity: PackageMask::CAPACITY,
            });
        }
        Ok(Self { locations })
    }

    /// Number of packages.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether no node holds a package.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Node of every package, indexed by package number.
    #[must_use]
    pub fn locations(&self) -> &[usize] {
        &self.locations
    }

    /// Node holding package `index`.
    #[must_use]
    pub fn location(&self, index: usize) -> Option<usize> {
        self.locations.get(index).copied()
    }

    /// `(package index, node)` pairs in package order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.locations.iter().copied().enumerate()
    }

    /// Mask with every package set.
    #[must_use]
    pub const fn full_mask(&self) -> PackageMask {
        PackageMask::full(self.locations.len())
    }
}
