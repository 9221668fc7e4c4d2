//! Global force/moment vector at the foundation reference point.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::geometry::Position;

/// Forces (N) and moments about the foundation reference (N·m) in the
/// global frame.
///
/// ## JSON Example
///
/// ```json
/// {
///   "fx_n": 0.0, "fy_n": 0.0, "fz_n": -100.0,
///   "mx_nm": -500.0, "my_nm": 0.0, "mz_nm": 0.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GlobalLoad {
    pub fx_n: f64,
    pub fy_n: f64,
    pub fz_n: f64,
    pub mx_nm: f64,
    pub my_nm: f64,
    pub mz_nm: f64,
}

impl GlobalLoad {
    /// All six components zero
    pub fn zero() -> Self {
        GlobalLoad::default()
    }

    /// Force `[Fx, Fy, Fz]` applied at `position`, with the moment `r × F`
    /// about the origin.
    ///
    /// ```rust
    /// use vessel_core::geometry::Position;
    /// use vessel_core::loads::GlobalLoad;
    ///
    /// let load = GlobalLoad::from_force_at([0.0, 0.0, -100.0], &Position::new(0.0, 5.0, 0.0));
    /// assert_eq!(load.mx_nm, -500.0);
    /// ```
    pub fn from_force_at(force: [f64; 3], position: &Position) -> Self {
        let [fx, fy, fz] = force;
        let (x, y, z) = (position.x_m, position.y_m, position.z_m);
        GlobalLoad {
            fx_n: fx,
            fy_n: fy,
            fz_n: fz,
            mx_nm: y * fz - z * fy,
            my_nm: z * fx - x * fz,
            mz_nm: x * fy - y * fx,
        }
    }

    /// Components in table order: Fx, Fy, Fz, Mx, My, Mz
    pub fn components(&self) -> [f64; 6] {
        [self.fx_n, self.fy_n, self.fz_n, self.mx_nm, self.my_nm, self.mz_nm]
    }

    pub fn force(&self) -> [f64; 3] {
        [self.fx_n, self.fy_n, self.fz_n]
    }

    pub fn moment(&self) -> [f64; 3] {
        [self.mx_nm, self.my_nm, self.mz_nm]
    }
}

impl Add for GlobalLoad {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        GlobalLoad {
            fx_n: self.fx_n + rhs.fx_n,
            fy_n: self.fy_n + rhs.fy_n,
            fz_n: self.fz_n + rhs.fz_n,
            mx_nm: self.mx_nm + rhs.mx_nm,
            my_nm: self.my_nm + rhs.my_nm,
            mz_nm: self.mz_nm + rhs.mz_nm,
        }
    }
}

impl AddAssign for GlobalLoad {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for GlobalLoad {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(GlobalLoad::zero(), Add::add)
    }
}

impl<'a> Sum<&'a GlobalLoad> for GlobalLoad {
    fn sum<I: Iterator<Item = &'a GlobalLoad>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
