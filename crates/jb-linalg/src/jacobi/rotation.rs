use jb_tensor::{ExecutionContext, Matrix};

/// One Jacobi rotation in the (p, q) plane.
///
/// With θ = ½·atan2(2·A[p,q], A[q,q] − A[p,p]) the rotation J is the identity
/// except for
///
/// ```text
/// J[p,p] =  cos θ    J[p,q] = sin θ
/// J[q,p] = −sin θ    J[q,q] = cos θ
/// ```
///
/// and (Jᵗ·A·J)[p,q] = ½·sin 2θ·(A[p,p] − A[q,q]) + cos 2θ·A[p,q] = 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationPlan {
    pub p: usize,
    pub q: usize,
    pub theta: f64,
    pub cos: f64,
    pub sin: f64,
}

impl RotationPlan {
    /// Plan the rotation that annihilates A[p, q]. Trig runs in the backend's precision.
    pub fn new(ctx: &ExecutionContext, a: &Matrix, p: usize, q: usize) -> Self {
        let backend = ctx.backend();
        let theta = 0.5 * backend.atan2(2.0 * a.get(p, q), a.get(q, q) - a.get(p, p));
        RotationPlan {
            p,
            q,
            theta,
            cos: backend.cos(theta),
            sin: backend.sin(theta),
        }
    }

    /// Dense n×n rotation matrix, resident on the context's backend.
    pub fn matrix(&self, ctx: &ExecutionContext, n: usize) -> Matrix {
        let mut j = ctx.backend().identity(n);
        j.set(self.p, self.p, self.cos);
        j.set(self.q, self.q, self.cos);
        j.set(self.p, self.q, self.sin);
        j.set(self.q, self.p, -self.sin);
        j
    }
}
