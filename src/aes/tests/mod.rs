mod test_ecb;
