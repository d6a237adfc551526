use forge_ids::ObjectID;

use crate::object::Object;

pub struct ObjectArena {
    objects: Vec<Option<Object>>,
    generations: Vec<u32>,
    free_indices: Vec<usize>,
}

impl Default for ObjectArena {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectArena {
    pub fn new() -> Self {
        // Index 0 is the nil sentinel so the first real ObjectID is 1.
        Self {
            objects: vec![None],
            generations: vec![0],
            free_indices: Vec::new(),
        }
    }

    /// Allocate a slot and build the object with the ID it will live under.
    pub fn insert_with(&mut self, make: impl FnOnce(ObjectID) -> Object) -> ObjectID {
        if let Some(index) = self.free_indices.pop() {
            let id = ObjectID::from_parts(index as u32, self.generations[index]);
            self.objects[index] = Some(make(id));
            return id;
        }

        let index = self.objects.len();
        let id = ObjectID::from_parts(index as u32, 0);
        self.objects.push(Some(make(id)));
        self.generations.push(0);
        id
    }

    #[inline]
    fn slot(&self, id: ObjectID) -> Option<usize> {
        let index = id.index() as usize;
        if id.is_nil() || index >= self.objects.len() || self.generations[index] != id.generation()
        {
            return None;
        }
        Some(index)
    }

    /// Get an object by ID, None if the generation doesn't match
    pub fn get(&self, id: ObjectID) -> Option<&Object> {
        self.slot(id).and_then(|index| self.objects[index].as_ref())
    }

    pub fn get_mut(&mut self, id: ObjectID) -> Option<&mut Object> {
        self.slot(id).and_then(|index| self.objects[index].as_mut())
    }

    /// Remove an object, bumping the slot generation
    pub fn remove(&mut self, id: ObjectID) -> Option<Object> {
        let index = self.slot(id)?;
        let removed = self.objects[index].take();
        if removed.is_some() {
            self.generations[index] = id.next_generation().generation();
            self.free_indices.push(index);
        }
        removed
    }

    pub fn contains(&self, id: ObjectID) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectID, &Object)> {
        self.objects
            .iter()
            .zip(self.generations.iter())
            .enumerate()
            .skip(1)
            .filter_map(|(index, (object, &generation))| {
                object
                    .as_ref()
                    .map(|o| (ObjectID::from_parts(index as u32, generation), o))
            })
    }

    /// Number of live objects
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}
