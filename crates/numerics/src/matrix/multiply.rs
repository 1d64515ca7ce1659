//! Matrix multiplication kernels.
//!
//! All products are computed by accumulating `left[(r, t)] * right[(t, c)]` into the result in
//! increasing `t` order. The vectorized 4x4 kernels use the same order, so they produce results
//! that are bit-identical to the generic kernel.

use std::env::{self, VarError};

use once_cell::sync::Lazy;

use crate::{traits::Arithmetic, Mat4f, Matrix, Vector};

/// Environment variable that overrides automatic kernel selection.
///
/// Accepted values are `generic`, `sse`, `neon` and `auto`.
const KERNEL_VAR: &str = "NUMERICS_MUL_KERNEL";

static SELECTED_KERNEL: Lazy<Kernel> = Lazy::new(|| {
    let kernel = match env::var(KERNEL_VAR) {
        Ok(v) if v == "auto" => Kernel::detect(),
        Ok(v) => match Kernel::from_name(&v) {
            Some(kernel) if kernel.is_supported() => kernel,
            Some(kernel) => {
                log::warn!(
                    "`{KERNEL_VAR}` requests the {kernel:?} kernel, which is not supported on \
                     this machine; selecting automatically"
                );
                Kernel::detect()
            }
            None => {
                log::warn!("invalid value set for `{KERNEL_VAR}` variable: '{v}'; selecting automatically");
                Kernel::detect()
            }
        },
        Err(VarError::NotPresent) => Kernel::detect(),
        Err(VarError::NotUnicode(s)) => {
            log::warn!(
                "invalid value set for `{KERNEL_VAR}` variable: {}; selecting automatically",
                s.to_string_lossy()
            );
            Kernel::detect()
        }
    };

    log::debug!("using {kernel:?} kernel for 4x4 matrix multiplication");
    kernel
});

/// Computes `result += left * right`.
///
/// `result` is usually zeroed before calling this.
pub fn multiply_vector_into<T: Arithmetic, const R: usize, const C: usize>(
    result: &mut Vector<T, R>,
    left: &Matrix<T, R, C>,
    right: &Vector<T, C>,
) {
    for row in 0..R {
        for t in 0..C {
            result[row] = result[row] + left[(row, t)] * right[t];
        }
    }
}

/// Computes `result += left * right`.
///
/// `result` is usually zeroed before calling this.
pub fn multiply_matrix_into<T: Arithmetic, const R: usize, const K: usize, const C: usize>(
    result: &mut Matrix<T, R, C>,
    left: &Matrix<T, R, K>,
    right: &Matrix<T, K, C>,
) {
    for col in 0..C {
        for row in 0..R {
            for t in 0..K {
                result[(row, col)] = result[(row, col)] + left[(row, t)] * right[(t, col)];
            }
        }
    }
}

/// A 4x4 [`f32`] matrix multiplication kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kernel {
    /// Portable scalar code.
    Generic,
    /// x86-64 SSE.
    Sse,
    /// AArch64 NEON.
    Neon,
}

impl Kernel {
    /// Returns the kernel used by [`Mat4f::mul_accelerated`].
    ///
    /// This is the best kernel supported by the CPU, unless overridden by setting the
    /// `NUMERICS_MUL_KERNEL` environment variable. The selection is made once per process.
    pub fn selected() -> Self {
        *SELECTED_KERNEL
    }

    /// Returns the fastest kernel supported by the CPU.
    pub fn detect() -> Self {
        [Kernel::Sse, Kernel::Neon]
            .into_iter()
            .find(|kernel| kernel.is_supported())
            .unwrap_or(Kernel::Generic)
    }

    /// Parses a kernel name as used in the `NUMERICS_MUL_KERNEL` environment variable.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "generic" => Some(Kernel::Generic),
            "sse" => Some(Kernel::Sse),
            "neon" => Some(Kernel::Neon),
            _ => None,
        }
    }

    /// Returns whether this kernel can run on the current CPU.
    pub fn is_supported(self) -> bool {
        match self {
            Kernel::Generic => true,
            Kernel::Sse => sse_supported(),
            Kernel::Neon => cfg!(target_arch = "aarch64"),
        }
    }

    /// Computes `left * right` with this kernel.
    ///
    /// Unsupported kernels fall back to [`Kernel::Generic`].
    pub fn multiply(self, left: &Mat4f, right: &Mat4f) -> Mat4f {
        let mut result = Mat4f::ZERO;
        match self {
            #[cfg(target_arch = "x86_64")]
            Kernel::Sse if sse_supported() => unsafe { sse::multiply(&mut result, left, right) },
            #[cfg(target_arch = "aarch64")]
            Kernel::Neon => unsafe { neon::multiply(&mut result, left, right) },
            _ => multiply_matrix_into(&mut result, left, right),
        }
        result
    }
}

#[cfg(target_arch = "x86_64")]
fn sse_supported() -> bool {
    is_x86_feature_detected!("sse")
}

#[cfg(not(target_arch = "x86_64"))]
fn sse_supported() -> bool {
    false
}

impl Mat4f {
    /// Multiplies two 4x4 matrices with the [selected kernel][Kernel::selected].
    ///
    /// The result is identical to `self * rhs`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerics::*;
    /// let a = Mat4f::from_fn(|row, col| (row * 4 + col) as f32);
    /// let b = Mat4f::from(transforms::rotate_y(Radiansf::R90));
    /// assert_eq!(a.mul_accelerated(b), a * b);
    /// ```
    pub fn mul_accelerated(self, rhs: Self) -> Self {
        Kernel::selected().multiply(&self, &rhs)
    }
}

#[cfg(target_arch = "x86_64")]
mod sse {
    use std::arch::x86_64::*;

    use crate::Mat4f;

    /// # Safety
    ///
    /// The CPU must support SSE.
    #[target_feature(enable = "sse")]
    pub(super) unsafe fn multiply(result: &mut Mat4f, left: &Mat4f, right: &Mat4f) {
        let l = left.as_slice().as_ptr();
        let columns = [
            _mm_loadu_ps(l),
            _mm_loadu_ps(l.add(4)),
            _mm_loadu_ps(l.add(8)),
            _mm_loadu_ps(l.add(12)),
        ];

        let out = result.as_mut_slice().as_mut_ptr();
        for col in 0..4 {
            let mut acc = _mm_loadu_ps(out.add(col * 4));
            for (t, column) in columns.iter().enumerate() {
                let factor = _mm_set1_ps(right[(t, col)]);
                acc = _mm_add_ps(acc, _mm_mul_ps(*column, factor));
            }
            _mm_storeu_ps(out.add(col * 4), acc);
        }
    }
}

#[cfg(target_arch = "aarch64")]
mod neon {
    use std::arch::aarch64::*;

    use crate::Mat4f;

    /// # Safety
    ///
    /// The CPU must support NEON, which every AArch64 CPU does.
    pub(super) unsafe fn multiply(result: &mut Mat4f, left: &Mat4f, right: &Mat4f) {
        let l = left.as_slice().as_ptr();
        let columns = [
            vld1q_f32(l),
            vld1q_f32(l.add(4)),
            vld1q_f32(l.add(8)),
            vld1q_f32(l.add(12)),
        ];

        let out = result.as_mut_slice().as_mut_ptr();
        for col in 0..4 {
            let mut acc = vld1q_f32(out.add(col * 4));
            for (t, column) in columns.iter().enumerate() {
                let factor = vdupq_n_f32(right[(t, col)]);
                acc = vaddq_f32(acc, vmulq_f32(*column, factor));
            }
            vst1q_f32(out.add(col * 4), acc);
        }
    }
}
