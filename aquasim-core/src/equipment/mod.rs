//! Equipment controllers (§4.4). Each controller is a pure function of the
//! snapshot; filter/powerhead/air pump/substrate/hardscape/lid have no
//! controller of their own since they only contribute to the passive
//! resource recomputation (`crate::passive_resources`).

pub mod ato;
pub mod auto_doser;
pub mod auto_feeder;
pub mod co2;
pub mod heater;
