use shards::Scene;

fn main() -> Result<(), shards::SceneError> {
    Scene::new().run()
}
