/// WAV serialization of rendered sequences.
pub mod wav;
