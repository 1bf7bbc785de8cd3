use rand::Rng;

/// Immutable point cloud: `3 * count` floats laid out as x, y, z triples.
#[derive(Clone, Debug)]
pub struct ParticleField {
    positions: Vec<f32>,
}

impl ParticleField {
    /// Sample `count` points uniformly inside the cube `[-spread, spread]^3`.
    pub fn generate<R: Rng + ?Sized>(count: usize, spread: f32, rng: &mut R) -> Self {
        let spread = spread.abs();
        let positions = (0..count * 3)
            .map(|_| {
                if spread > 0.0 {
                    rng.gen_range(-spread..=spread)
                } else {
                    0.0
                }
            })
            .collect();
        Self { positions }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Flat position buffer, ready to upload as a vertex buffer.
    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn point(&self, i: usize) -> Option<[f32; 3]> {
        let p = self.positions.get(i * 3..i * 3 + 3)?;
        Some([p[0], p[1], p[2]])
    }
}
