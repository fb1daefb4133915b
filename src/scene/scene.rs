//! Scene container: the object arena, registration, and update dispatch.

use std::collections::{HashMap, HashSet};

use crate::scene::camera::Camera;
use crate::scene::error::SceneError;
use crate::scene::object::{Object3D, ObjectDesc};
use crate::scene::store::{Channel, GeometryStore};
use crate::scene::warnings::WarningSink;

/// Custom per-object update behavior, dispatched by name before each
/// transform pass. Registered on the scene instead of being stored inside
/// the object so the transform pipeline stays free of callback side
/// effects.
pub trait ObjectUpdate {
    fn update(&mut self, object: &mut Object3D, dt_ms: f32);
}

impl<F: FnMut(&mut Object3D, f32)> ObjectUpdate for F {
    fn update(&mut self, object: &mut Object3D, dt_ms: f32) {
        self(object, dt_ms)
    }
}

/// Main scene: owns the flattened object arena, the shared geometry
/// store, and the camera.
///
/// Objects are appended in depth-first registration order, parent always
/// before its children. The per-frame transform pass relies on that
/// ordering to compose world matrices in a single top-to-bottom sweep, so
/// every mutation path here (registration, re-parenting, removal) must
/// preserve it.
pub struct Scene {
    pub camera: Camera,
    pub(crate) objects: Vec<Object3D>,
    pub(crate) store: GeometryStore,
    pub(crate) warnings: WarningSink,
    index: HashMap<String, usize>,
    handlers: HashMap<String, Box<dyn ObjectUpdate>>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            camera: Camera::new(),
            objects: Vec::new(),
            store: GeometryStore::new(),
            warnings: WarningSink::new(),
            index: HashMap::new(),
            handlers: HashMap::new(),
        }
    }

    /// Registers an object tree, flattening it depth-first so that every
    /// parent lands in the arena before its children.
    ///
    /// The whole tree is validated before anything is inserted; on error
    /// the scene is unchanged.
    pub fn add_object(&mut self, desc: ObjectDesc) -> Result<(), SceneError> {
        let mut incoming = HashSet::new();
        self.validate(&desc, &mut incoming)?;
        self.register(&desc, None);
        Ok(())
    }

    fn validate(&self, desc: &ObjectDesc, seen: &mut HashSet<String>) -> Result<(), SceneError> {
        if self.index.contains_key(&desc.name) || !seen.insert(desc.name.clone()) {
            return Err(SceneError::DuplicateName(desc.name.clone()));
        }
        if desc.vertices.len() % 3 != 0 {
            return Err(SceneError::MalformedVertexData(desc.name.clone()));
        }
        for child in &desc.children {
            self.validate(child, seen)?;
        }
        Ok(())
    }

    fn register(&mut self, desc: &ObjectDesc, parent: Option<usize>) {
        let vertex_range = self.store.append(Channel::Vertex, &desc.name, &desc.vertices);
        if let Some(normals) = &desc.normals {
            self.store.append(Channel::Normal, &desc.name, normals);
        }
        if let Some(texcoords) = &desc.texcoords {
            self.store.append(Channel::Texcoord, &desc.name, texcoords);
        }
        if let Some(colors) = &desc.colors {
            self.store.append(Channel::Color, &desc.name, colors);
        }

        let object = Object3D::from_desc(desc, parent, vertex_range);
        let index = self.objects.len();
        self.index.insert(object.name.clone(), index);
        self.objects.push(object);

        for child in &desc.children {
            self.register(child, Some(index));
        }
    }

    /// Links an already-registered object under a parent.
    ///
    /// Rejected when the child already has a different parent (the arena
    /// holds a forest, not a DAG) or when the parent was registered after
    /// the child, which would break the composition sweep's ordering.
    pub fn set_parent(&mut self, child: &str, parent: &str) -> Result<(), SceneError> {
        let child_idx = self.index_of(child)?;
        let parent_idx = self.index_of(parent)?;

        if let Some(existing) = self.objects[child_idx].parent {
            if existing != parent_idx {
                return Err(SceneError::ParentConflict {
                    child: child.to_string(),
                    existing: self.objects[existing].name.clone(),
                    requested: parent.to_string(),
                });
            }
            return Ok(());
        }

        // `>=` also catches self-parenting.
        if parent_idx >= child_idx {
            return Err(SceneError::OrderViolation {
                parent: parent.to_string(),
                child: child.to_string(),
            });
        }

        self.objects[child_idx].parent = Some(parent_idx);
        Ok(())
    }

    /// Removes an object and its transitive children.
    ///
    /// The removed objects' geometry stays in the shared store's flat
    /// buffers (only the lookup entries go away, so surviving offsets
    /// never shift). A scene that adds and removes objects for a long
    /// time grows its buffers accordingly.
    pub fn remove_object(&mut self, name: &str) -> Result<(), SceneError> {
        let root = self.index_of(name)?;

        // Parents precede children, so one forward sweep finds the whole
        // subtree.
        let mut removed = HashSet::new();
        removed.insert(root);
        let mut removed_names = vec![self.objects[root].name.clone()];
        for i in root + 1..self.objects.len() {
            if let Some(p) = self.objects[i].parent {
                if removed.contains(&p) {
                    removed.insert(i);
                    removed_names.push(self.objects[i].name.clone());
                }
            }
        }

        let mut remap: HashMap<usize, usize> = HashMap::new();
        let mut kept = Vec::with_capacity(self.objects.len() - removed.len());
        for (i, object) in self.objects.drain(..).enumerate() {
            if removed.contains(&i) {
                continue;
            }
            remap.insert(i, kept.len());
            kept.push(object);
        }

        self.index.clear();
        for (i, object) in kept.iter_mut().enumerate() {
            object.parent = object.parent.map(|p| remap[&p]);
            self.index.insert(object.name.clone(), i);
        }
        self.objects = kept;

        for removed_name in &removed_names {
            self.store.remove(removed_name);
            self.handlers.remove(removed_name);
        }

        Ok(())
    }

    /// Registers custom update behavior for an object, replacing any
    /// previous handler under the same name.
    pub fn set_update_handler(&mut self, name: &str, handler: Box<dyn ObjectUpdate>) {
        self.handlers.insert(name.to_string(), handler);
    }

    /// Runs all registered update handlers. Call this once per frame,
    /// before the transform pass, with the elapsed time in milliseconds.
    pub fn run_updates(&mut self, dt_ms: f32) {
        for object in &mut self.objects {
            if let Some(handler) = self.handlers.get_mut(&object.name) {
                handler.update(object, dt_ms);
            }
        }
    }

    pub fn object(&self, name: &str) -> Option<&Object3D> {
        self.index.get(name).map(|&i| &self.objects[i])
    }

    pub fn object_mut(&mut self, name: &str) -> Option<&mut Object3D> {
        let i = *self.index.get(name)?;
        Some(&mut self.objects[i])
    }

    /// All objects in registration (composition) order.
    pub fn objects(&self) -> &[Object3D] {
        &self.objects
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn object_names(&self) -> Vec<&str> {
        self.objects.iter().map(|o| o.name.as_str()).collect()
    }

    /// This object's slice of the shared vertex channel.
    pub fn vertex_slice(&self, name: &str) -> Option<&[f32]> {
        self.store.slice(Channel::Vertex, name)
    }

    pub fn offset_and_length(&self, channel: Channel, name: &str) -> Option<(usize, usize)> {
        self.store.offset_and_length(channel, name)
    }

    /// The scene's shared geometry store, for bulk consumption by a
    /// rendering driver.
    pub fn geometry(&self) -> &GeometryStore {
        &self.store
    }

    fn index_of(&self, name: &str) -> Result<usize, SceneError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| SceneError::UnknownObject(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desc(name: &str) -> ObjectDesc {
        ObjectDesc::new(name, vec![0.0, 0.0, 0.0])
    }

    fn tree() -> ObjectDesc {
        desc("root")
            .child(desc("arm").child(desc("hand")))
            .child(desc("leg"))
    }

    #[test]
    fn registration_flattens_depth_first() {
        let mut scene = Scene::new();
        scene.add_object(tree()).unwrap();
        assert_eq!(scene.object_names(), vec!["root", "arm", "hand", "leg"]);

        // Every parent index points earlier in the arena.
        for (i, object) in scene.objects().iter().enumerate() {
            if let Some(p) = object.parent_index() {
                assert!(p < i);
            }
        }
        assert_eq!(scene.object("hand").unwrap().parent_index(), Some(1));
    }

    #[test]
    fn duplicate_names_are_rejected_atomically() {
        let mut scene = Scene::new();
        scene.add_object(desc("root")).unwrap();

        let err = scene.add_object(desc("other").child(desc("root"))).unwrap_err();
        assert_eq!(err, SceneError::DuplicateName("root".into()));
        // Nothing from the failed tree was inserted.
        assert_eq!(scene.object_count(), 1);
        assert!(scene.object("other").is_none());
    }

    #[test]
    fn duplicates_within_one_tree_are_rejected() {
        let mut scene = Scene::new();
        let err = scene.add_object(desc("twin").child(desc("twin"))).unwrap_err();
        assert_eq!(err, SceneError::DuplicateName("twin".into()));
        assert_eq!(scene.object_count(), 0);
    }

    #[test]
    fn malformed_vertex_data_is_rejected() {
        let mut scene = Scene::new();
        let err = scene
            .add_object(ObjectDesc::new("broken", vec![1.0, 2.0]))
            .unwrap_err();
        assert_eq!(err, SceneError::MalformedVertexData("broken".into()));
    }

    #[test]
    fn set_parent_rejects_second_parent() {
        let mut scene = Scene::new();
        scene.add_object(desc("a")).unwrap();
        scene.add_object(desc("b")).unwrap();
        scene.add_object(desc("c")).unwrap();

        scene.set_parent("c", "a").unwrap();
        // Same parent again is a no-op.
        scene.set_parent("c", "a").unwrap();

        let err = scene.set_parent("c", "b").unwrap_err();
        assert!(matches!(err, SceneError::ParentConflict { .. }));
    }

    #[test]
    fn set_parent_rejects_parent_registered_after_child() {
        let mut scene = Scene::new();
        scene.add_object(desc("early")).unwrap();
        scene.add_object(desc("late")).unwrap();

        let err = scene.set_parent("early", "late").unwrap_err();
        assert_eq!(
            err,
            SceneError::OrderViolation {
                parent: "late".into(),
                child: "early".into(),
            }
        );
    }

    #[test]
    fn remove_object_takes_the_subtree_and_remaps_parents() {
        let mut scene = Scene::new();
        scene.add_object(tree()).unwrap();
        scene.remove_object("arm").unwrap();

        assert_eq!(scene.object_names(), vec!["root", "leg"]);
        assert!(scene.object("hand").is_none());
        assert_eq!(scene.object("leg").unwrap().parent_index(), Some(0));
    }

    #[test]
    fn mutation_through_object_mut_cannot_desync_the_name_index() {
        let mut scene = Scene::new();
        scene.add_object(desc("a")).unwrap();

        // Transform fields are open for mutation; the name is read-only
        // and stays keyed to the index.
        let object = scene.object_mut("a").unwrap();
        object.position.x = 3.0;
        assert_eq!(object.name(), "a");
        assert_eq!(scene.object("a").unwrap().position.x, 3.0);
    }

    #[test]
    fn remove_unknown_object_errors() {
        let mut scene = Scene::new();
        assert_eq!(
            scene.remove_object("ghost").unwrap_err(),
            SceneError::UnknownObject("ghost".into())
        );
    }

    #[test]
    fn geometry_lands_in_the_shared_store() {
        let mut scene = Scene::new();
        scene
            .add_object(
                ObjectDesc::new("a", vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
                    .normals(vec![0.0, 1.0, 0.0]),
            )
            .unwrap();
        scene
            .add_object(ObjectDesc::new("b", vec![7.0, 8.0, 9.0]))
            .unwrap();

        assert_eq!(scene.offset_and_length(Channel::Vertex, "a"), Some((0, 6)));
        assert_eq!(scene.offset_and_length(Channel::Vertex, "b"), Some((6, 3)));
        assert_eq!(scene.offset_and_length(Channel::Normal, "a"), Some((0, 3)));
        assert_eq!(scene.vertex_slice("b").unwrap(), &[7.0, 8.0, 9.0]);
    }

    #[test]
    fn update_handlers_run_against_their_object() {
        let mut scene = Scene::new();
        scene.add_object(desc("spinner")).unwrap();
        scene.set_update_handler(
            "spinner",
            Box::new(|object: &mut Object3D, dt_ms: f32| {
                object.rotation.y += 0.001 * dt_ms;
            }),
        );

        scene.run_updates(16.0);
        scene.run_updates(16.0);
        let spun = scene.object("spinner").unwrap().rotation.y;
        assert!((spun - 0.032).abs() < 1e-6);
    }
}
