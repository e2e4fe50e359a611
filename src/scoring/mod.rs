// Tag-combination scoring — learn a score per tag subset from past
// candidates, then score and rank new candidates with it.

pub mod combination;
pub mod rank;
pub mod table;
