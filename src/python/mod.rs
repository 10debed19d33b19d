//! Python bindings for the Klondike environment.
//!
//! # Quick Start
//!
//! ```python
//! import rust_klondike as kl
//!
//! env = kl.KlondikeEnv(seed=42)
//! obs = env.reset()
//! obs, reward, done = env.step(1)  # draw
//! print(env.render())
//! ```

use pyo3::prelude::*;

mod py_env;

pub use py_env::*;

/// rust_klondike: a deterministic Klondike environment for RL agents.
#[pymodule]
fn rust_klondike(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyKlondikeEnv>()?;
    Ok(())
}
