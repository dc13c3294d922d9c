use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tsp_core::{City, Error, Instance};
use tsp_exhaustive::{solve_exhaustive, ExhaustiveSolver};

fn random_cities(n: usize, seed: u64) -> Vec<City> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    (0..n)
        .map(|i| City::new(100 + i as u32, rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)))
        .collect()
}

#[test]
fn two_cities_there_and_back() {
    let cities = [City::new(1, 0.0, 0.0), City::new(2, 3.0, 4.0)];
    let solution = solve_exhaustive(&cities).unwrap();
    assert_eq!(solution.cost, 10.0);
    assert_eq!(solution.tour, vec![1, 2, 1]);
}

#[test]
fn single_city() {
    let solution = solve_exhaustive(&[City::new(42, 1.5, -2.0)]).unwrap();
    assert_eq!(solution.cost, 0.0);
    assert_eq!(solution.tour, vec![42, 42]);
}

#[test]
fn unit_square_perimeter() {
    let cities = [
        City::new(1, 0.0, 0.0),
        City::new(2, 1.0, 0.0),
        City::new(3, 1.0, 1.0),
        City::new(4, 0.0, 1.0),
    ];
    let solution = solve_exhaustive(&cities).unwrap();
    assert!((solution.cost - 4.0).abs() < 1e-12);
    assert!(
        solution.tour == vec![1, 2, 3, 4, 1] || solution.tour == vec![1, 4, 3, 2, 1],
        "unexpected tour {:?}",
        solution.tour
    );
}

#[test]
fn random_tours_are_valid() {
    for seed in 0..5 {
        let cities = random_cities(7, seed);
        let instance = Instance::new(cities.clone()).unwrap();
        let solution = solve_exhaustive(&cities).unwrap();
        solution.verify(&instance).unwrap();
    }
}

#[test]
fn repeated_solves_are_identical() {
    let cities = random_cities(8, 99);
    let first = solve_exhaustive(&cities).unwrap();
    let second = solve_exhaustive(&cities).unwrap();
    assert_eq!(first, second);
}

#[test]
fn optimum_not_worse_than_identity_order() {
    let cities = random_cities(8, 7);
    let instance = Instance::new(cities.clone()).unwrap();
    let mut identity: Vec<u32> = cities.iter().map(|c| c.id).collect();
    identity.push(cities[0].id);
    let baseline = instance.tour_length(&identity).unwrap();

    let solution = ExhaustiveSolver::new(&instance).unwrap().solve();
    assert!(solution.cost <= baseline);
}

#[test]
fn invalid_instances_fail_fast() {
    assert!(matches!(
        solve_exhaustive(&[]),
        Err(Error::InvalidInstance(_))
    ));
    assert!(matches!(
        solve_exhaustive(&[City::new(1, 0.0, 0.0), City::new(1, 1.0, 1.0)]),
        Err(Error::InvalidInstance(_))
    ));
    assert!(matches!(
        solve_exhaustive(&[City::new(1, f64::NAN, 0.0)]),
        Err(Error::InvalidInstance(_))
    ));
}
