// Questionnaire answers → normalized profile.
// Pure data mapping; nothing in here touches the network.

pub mod answers;
pub mod buckets;
pub mod profile;
