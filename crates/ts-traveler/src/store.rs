//! Live traveler storage keyed by `TravelerId`.
//!
//! Ids are handed out from a monotonically increasing counter and never
//! reused, so a handle left in a station queue after its traveler is removed
//! can only ever resolve to "gone".  The `BTreeMap` keeps iteration in
//! ascending id order, which is the order the round applies intents in.

use std::collections::BTreeMap;

use ts_core::{Point, StationId, TravelerId, TravelerRng, TravelerTuning};
use ts_motion::MotionAgent;
use ts_station::{QueueMembers, ServiceTicket};

use crate::Traveler;

pub struct TravelerStore<M: MotionAgent> {
    travelers: BTreeMap<TravelerId, Traveler<M>>,
    next_id:   u32,
    seed:      u64,
}

impl<M: MotionAgent> TravelerStore<M> {
    /// Empty store.  `seed` drives every traveler's fraud roll.
    pub fn new(seed: u64) -> Self {
        Self { travelers: BTreeMap::new(), next_id: 0, seed }
    }

    /// Create a traveler bound to `station` and return its id.
    ///
    /// The fraud roll is made once, here, and only if the station permits
    /// fraud at spawn time.  A traveler spawned at a gate never intends fraud.
    pub fn spawn(
        &mut self,
        station:         StationId,
        fraud_permitted: bool,
        tuning:          TravelerTuning,
        motion:          M,
    ) -> TravelerId {
        let id = TravelerId(self.next_id);
        self.next_id += 1;

        let mut rng = TravelerRng::new(self.seed, id);
        let fraud_intent = fraud_permitted && rng.gen_bool(tuning.fraud_probability);

        tracing::trace!(traveler = %id, %station, fraud_intent, "spawned");
        self.travelers.insert(id, Traveler::new(id, station, fraud_intent, tuning, motion));
        id
    }

    #[inline]
    pub fn get(&self, id: TravelerId) -> Option<&Traveler<M>> {
        self.travelers.get(&id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: TravelerId) -> Option<&mut Traveler<M>> {
        self.travelers.get_mut(&id)
    }

    pub fn remove(&mut self, id: TravelerId) -> Option<Traveler<M>> {
        self.travelers.remove(&id)
    }

    #[inline]
    pub fn contains(&self, id: TravelerId) -> bool {
        self.travelers.contains_key(&id)
    }

    /// Number of live travelers.
    #[inline]
    pub fn len(&self) -> usize {
        self.travelers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.travelers.is_empty()
    }

    /// How many ids have ever been handed out.
    #[inline]
    pub fn spawned_total(&self) -> u32 {
        self.next_id
    }

    /// Live ids in ascending order, collected so the caller may mutate the
    /// store while walking them.
    pub fn ids(&self) -> Vec<TravelerId> {
        self.travelers.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Traveler<M>> + '_ {
        self.travelers.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Traveler<M>> + '_ {
        self.travelers.values_mut()
    }
}

impl<M: MotionAgent> QueueMembers for TravelerStore<M> {
    fn is_live(&self, traveler: TravelerId) -> bool {
        self.contains(traveler)
    }

    fn assign_slot(&mut self, traveler: TravelerId, slot: usize, position: Point) {
        if let Some(t) = self.travelers.get_mut(&traveler) {
            t.set_queue_slot(slot, position);
        }
    }

    fn has_arrived(&self, traveler: TravelerId, admission_point: Point) -> bool {
        self.travelers
            .get(&traveler)
            .is_some_and(|t| t.is_at_front(admission_point))
    }

    fn begin_passing(&mut self, traveler: TravelerId, ticket: ServiceTicket) -> bool {
        self.travelers
            .get_mut(&traveler)
            .is_some_and(|t| t.begin_passing(ticket))
    }
}
