use perron::prelude::*;

fn coordinate(latitude: f64, longitude: f64) -> Coordinate {
    Coordinate {
        latitude,
        longitude,
    }
}

fn sample_catalogue() -> Catalogue {
    let mut catalogue = Catalogue::new();
    catalogue.add_stop("stop A", coordinate(53.199489, -105.759253));
    catalogue.add_stop("stop B", coordinate(54.840504, 46.591607));
    catalogue.add_stop("stop C", coordinate(-23.354995, 119.732057));
    catalogue.add_stop("stop D", coordinate(48.071613, 114.524894));
    catalogue.add_stop("stop E", coordinate(64.136986, -21.872559));
    catalogue.add_stop("stop F", coordinate(-36.85135, 174.762452));
    catalogue
}

#[test]
fn unknown_names_are_absent_test() {
    let catalogue = Catalogue::new();
    assert!(catalogue.stop("unknown").is_none());
    assert!(catalogue.route("unknown").is_none());
}

#[test]
fn ring_route_test() {
    let mut catalogue = sample_catalogue();
    catalogue.add_route(
        "bus 001",
        &["stop C", "stop A", "stop A", "stop F", "stop D", "stop C"],
        true,
    );

    let route = catalogue.route("bus 001").unwrap();
    let stats = catalogue.route_stats(route);
    assert_eq!(stats.stops_amount, 6);
    assert_eq!(stats.unique_stops_amount, 4);
}

#[test]
fn there_and_back_route_test() {
    let mut catalogue = sample_catalogue();
    catalogue.set_distance("stop A", "stop B", 100);
    catalogue.add_route("bus 999", &["stop A", "stop B", "stop E"], false);

    let route = catalogue.route("bus 999").unwrap();
    let stats = catalogue.route_stats(route);
    assert_eq!(stats.stops_amount, 5);
    assert_eq!(stats.road_length, 200.0);
    assert!((stats.curvature - 8.673_332_016_785_389e-6).abs() < 1e-11);
}

#[test]
fn distance_fallback_test() {
    let mut catalogue = sample_catalogue();

    catalogue.set_distance("stop A", "stop B", 1000);
    assert_eq!(catalogue.distance("stop B", "stop A"), 1000);

    // The asked-for direction wins once both are declared.
    catalogue.set_distance("stop B", "stop A", 1500);
    assert_eq!(catalogue.distance("stop A", "stop B"), 1000);
    assert_eq!(catalogue.distance("stop B", "stop A"), 1500);

    assert_eq!(catalogue.distance("stop A", "stop D"), 0);
}

#[test]
fn whitespace_names_test() {
    let mut catalogue = sample_catalogue();
    catalogue.add_stop("  ", coordinate(0.0, 0.0));
    catalogue.set_distance("  ", "stop A", 1000);
    assert_eq!(catalogue.distance("stop A", "  "), 1000);
}

#[test]
fn self_loop_route_test() {
    let mut catalogue = sample_catalogue();
    catalogue.set_distance("stop A", "stop A", 300);
    catalogue.add_route("cyclic", &["stop A", "stop A", "stop A"], false);

    let stats = catalogue.route_stats(catalogue.route("cyclic").unwrap());
    assert_eq!(stats.stops_amount, 5);
    assert_eq!(stats.road_length, 1200.0);
    assert_eq!(stats.unique_stops_amount, 1);
}

#[test]
fn empty_route_test() {
    let mut catalogue = sample_catalogue();
    catalogue.add_route("empty", &[] as &[&str], true);
    catalogue.add_route("empty line", &[] as &[&str], false);

    for name in ["empty", "empty line"] {
        let stats = catalogue.route_stats(catalogue.route(name).unwrap());
        assert_eq!(stats.stops_amount, 0);
        assert_eq!(stats.road_length, 0.0);
        assert!(stats.curvature.is_nan());
    }
}

#[test]
fn max_distance_legs_do_not_wrap_test() {
    let mut catalogue = sample_catalogue();
    catalogue.set_distance("stop B", "stop C", u32::MAX);
    catalogue.add_route("B2C and back", &["stop B", "stop C"], false);

    let stats = catalogue.route_stats(catalogue.route("B2C and back").unwrap());
    assert_eq!(stats.road_length, f64::from(u32::MAX) * 2.0);
}

#[test]
fn unknown_stop_reference_is_tolerated_test() {
    let mut catalogue = sample_catalogue();
    catalogue.add_route("ghostly", &["stop A", "ghost", "stop B"], false);

    let route = catalogue.route("ghostly").unwrap();
    let stats = catalogue.route_stats(route);
    assert_eq!(stats.stops_amount, 5);
    assert_eq!(stats.unique_stops_amount, 2);
    assert_eq!(stats.road_length, 0.0);
    assert!(catalogue.stop("ghost").is_none());
}

#[test]
fn stop_membership_test() {
    let mut catalogue = sample_catalogue();
    catalogue.add_route("bbb", &["stop A", "stop B"], true);
    catalogue.add_route("aaa", &["stop A"], true);

    let referenced = catalogue.stop_stats(catalogue.stop("stop A").unwrap());
    let names: Vec<&str> = referenced
        .routes
        .unwrap()
        .iter()
        .map(|name| name.as_ref())
        .collect();
    assert_eq!(names, ["aaa", "bbb"]);

    let unreferenced = catalogue.stop_stats(catalogue.stop("stop E").unwrap());
    assert!(unreferenced.routes.is_none());
}

#[test]
fn readded_stop_shadows_test() {
    let mut catalogue = Catalogue::new();
    catalogue.add_stop("twin", coordinate(1.0, 1.0));
    catalogue.add_stop("twin", coordinate(2.0, 2.0));
    assert_eq!(
        catalogue.stop("twin").unwrap().coordinate,
        coordinate(2.0, 2.0)
    );
}

#[test]
fn sorted_name_listings_test() {
    let mut catalogue = Catalogue::new();
    catalogue.add_stop("b", coordinate(0.0, 0.0));
    catalogue.add_stop("a", coordinate(0.0, 1.0));
    catalogue.add_route("2", &["b"], true);
    catalogue.add_route("1", &["a"], true);

    let stop_names = catalogue.stop_names();
    let route_names = catalogue.route_names();
    let stop_names: Vec<&str> = stop_names.iter().map(|name| name.as_ref()).collect();
    let route_names: Vec<&str> = route_names.iter().map(|name| name.as_ref()).collect();
    assert_eq!(stop_names, ["a", "b"]);
    assert_eq!(route_names, ["1", "2"]);
}
