//! Environment bindings for Python.

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::GameConfig;
use crate::env::{SolitaireEnv, ACTION_COUNT};
use crate::game::OBSERVATION_LEN;

fn to_py_err(e: crate::core::Error) -> PyErr {
    PyErr::new::<PyValueError, _>(e.to_string())
}

/// Python wrapper for SolitaireEnv.
///
/// Observations are flat `uint8` numpy arrays of length 201.
#[pyclass(name = "KlondikeEnv")]
pub struct PyKlondikeEnv {
    inner: SolitaireEnv,
}

#[pymethods]
impl PyKlondikeEnv {
    /// Create a new environment.
    ///
    /// # Arguments
    /// - seed: RNG seed, random if omitted
    /// - draw_count: Cards per draw
    /// - free_rebuilds: Rebuilds before drawing on an empty stock is penalised
    #[new]
    #[pyo3(signature = (seed = None, draw_count = 3, free_rebuilds = 3))]
    fn new(seed: Option<u64>, draw_count: usize, free_rebuilds: u32) -> Self {
        let mut config = GameConfig::new()
            .with_draw_count(draw_count)
            .with_free_rebuilds(free_rebuilds);
        config.seed = seed;
        Self {
            inner: SolitaireEnv::new(config),
        }
    }

    /// Deal a new game and return its observation.
    #[pyo3(signature = (seed = None))]
    fn reset<'py>(&mut self, py: Python<'py>, seed: Option<u64>) -> Bound<'py, PyArray1<u8>> {
        let observation = self.inner.reset(seed);
        PyArray1::from_vec_bound(py, observation.flatten())
    }

    /// Apply an action. Returns (observation, reward, done).
    fn step<'py>(
        &mut self,
        py: Python<'py>,
        action: usize,
    ) -> PyResult<(Bound<'py, PyArray1<u8>>, f32, bool)> {
        let step = self.inner.step(action).map_err(to_py_err)?;
        let observation = PyArray1::from_vec_bound(py, step.observation.flatten());
        Ok((observation, step.reward, step.done))
    }

    /// Current observation.
    fn observation<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u8>> {
        PyArray1::from_vec_bound(py, self.inner.observation().flatten())
    }

    /// Serialized observation bytes.
    fn observation_bytes(&self) -> PyResult<Vec<u8>> {
        self.inner.observation().to_bytes().map_err(to_py_err)
    }

    #[getter]
    fn score(&self) -> f32 {
        self.inner.game().score()
    }

    #[getter]
    fn seed(&self) -> Option<u64> {
        self.inner.game().seed()
    }

    #[getter]
    fn done(&self) -> bool {
        self.inner.is_done()
    }

    #[getter]
    fn steps(&self) -> u64 {
        self.inner.steps()
    }

    fn is_won(&self) -> bool {
        self.inner.game().is_won()
    }

    #[classattr]
    fn action_count() -> usize {
        ACTION_COUNT
    }

    #[classattr]
    fn observation_len() -> usize {
        OBSERVATION_LEN
    }

    fn render(&self) -> String {
        self.inner.render()
    }

    fn __repr__(&self) -> String {
        format!(
            "KlondikeEnv(seed={:?}, steps={}, score={})",
            self.inner.game().seed(),
            self.inner.steps(),
            self.inner.game().score()
        )
    }
}
